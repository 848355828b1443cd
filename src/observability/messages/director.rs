// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for construction runs driven by the director.

use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

use crate::observability::messages::StructuredLog;
use crate::products::SteeringSide;

/// The director started driving a builder through the protocol.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use vehicle_builder::observability::messages::director::ConstructionStarted;
/// use vehicle_builder::products::SteeringSide;
///
/// let msg = ConstructionStarted {
///     builder: "vehicle",
///     seats: 4,
///     engine: "V8",
///     steering: SteeringSide::Left,
///     gps: true,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Constructing with 'vehicle' builder: seats=4, engine=V8, steering=left, gps=true"
/// );
/// ```
pub struct ConstructionStarted<'a> {
    pub builder: &'a str,
    pub seats: u32,
    pub engine: &'a str,
    pub steering: SteeringSide,
    pub gps: bool,
}

impl Display for ConstructionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Constructing with '{}' builder: seats={}, engine={}, steering={}, gps={}",
            self.builder, self.seats, self.engine, self.steering, self.gps
        )
    }
}

impl StructuredLog for ConstructionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            builder = self.builder,
            seats = self.seats,
            engine = self.engine,
            steering = %self.steering,
            gps = self.gps,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "construction",
            span_name = name,
            builder = self.builder,
            seats = self.seats,
            engine = self.engine,
            steering = %self.steering,
            gps = self.gps,
        )
    }
}

/// Every protocol step succeeded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConstructionCompleted<'a> {
    pub builder: &'a str,
    pub duration: Duration,
}

impl Display for ConstructionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Construction with '{}' builder completed in {:?}",
            self.builder, self.duration
        )
    }
}

impl StructuredLog for ConstructionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            builder = self.builder,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "construction_completed",
            span_name = name,
            builder = self.builder,
            duration = ?self.duration,
        )
    }
}

/// A protocol step was rejected by the builder.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConstructionFailed<'a> {
    pub builder: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ConstructionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Construction with '{}' builder failed: {}",
            self.builder, self.error
        )
    }
}

impl StructuredLog for ConstructionFailed<'_> {
    fn log(&self) {
        tracing::error!(builder = self.builder, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "construction_failed",
            span_name = name,
            builder = self.builder,
            error = %self.error,
        )
    }
}
