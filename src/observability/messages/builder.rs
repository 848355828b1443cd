// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for builder lifecycle events.

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::observability::messages::StructuredLog;
use crate::traits::BuildStage;

/// A builder discarded its in-progress product and started a fresh one.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct BuilderReset<'a> {
    pub builder: &'a str,
}

impl Display for BuilderReset<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Builder '{}' reset: started a new product", self.builder)
    }
}

impl StructuredLog for BuilderReset<'_> {
    fn log(&self) {
        tracing::debug!(builder = self.builder, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("builder_reset", span_name = name, builder = self.builder)
    }
}

/// A setter recorded one aspect of the product.
///
/// # Log Level
/// `trace!` - Fine-grained step event
pub struct StepRecorded<'a> {
    pub builder: &'a str,
    pub step: &'a str,
}

impl Display for StepRecorded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Builder '{}' recorded {}", self.builder, self.step)
    }
}

impl StructuredLog for StepRecorded<'_> {
    fn log(&self) {
        tracing::trace!(builder = self.builder, step = self.step, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "builder_step",
            span_name = name,
            builder = self.builder,
            step = self.step,
        )
    }
}

/// A completed product was handed to the caller.
///
/// # Log Level
/// `debug!` - Routine lifecycle event
pub struct ProductDelivered<'a> {
    pub builder: &'a str,
}

impl Display for ProductDelivered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Builder '{}' delivered its product", self.builder)
    }
}

impl StructuredLog for ProductDelivered<'_> {
    fn log(&self) {
        tracing::debug!(builder = self.builder, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("product_delivered", span_name = name, builder = self.builder)
    }
}

/// An operation was called in a stage that does not allow it.
///
/// # Log Level
/// `warn!` - Caller bug surfaced as an error
pub struct ProtocolViolationDetected<'a> {
    pub builder: &'a str,
    pub operation: &'a str,
    pub stage: BuildStage,
}

impl Display for ProtocolViolationDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Builder '{}' rejected {} while {}",
            self.builder, self.operation, self.stage
        )
    }
}

impl StructuredLog for ProtocolViolationDetected<'_> {
    fn log(&self) {
        tracing::warn!(
            builder = self.builder,
            operation = self.operation,
            stage = %self.stage,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "protocol_violation",
            span_name = name,
            builder = self.builder,
            operation = self.operation,
            stage = %self.stage,
        )
    }
}

/// The product was requested before every aspect was recorded.
///
/// # Log Level
/// `warn!` - Caller bug surfaced as an error
pub struct IncompleteProductRequested<'a> {
    pub builder: &'a str,
    pub missing: &'a [&'static str],
}

impl Display for IncompleteProductRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Builder '{}' asked for an incomplete product: missing {}",
            self.builder,
            self.missing.join(", ")
        )
    }
}

impl StructuredLog for IncompleteProductRequested<'_> {
    fn log(&self) {
        tracing::warn!(
            builder = self.builder,
            missing_count = self.missing.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "incomplete_product",
            span_name = name,
            builder = self.builder,
            missing_count = self.missing.len(),
        )
    }
}
