// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `builder` - reset, recorded steps, deliveries and protocol violations
//! * `director` - start, completion and failure of a construction run

use std::fmt::Display;
use tracing::Span;

pub mod builder;
pub mod director;

/// A message that knows how to emit itself as a structured `tracing` event.
///
/// `log` emits the event at the level the message documents, with its
/// fields attached. `span` opens a span carrying the same fields.
pub trait StructuredLog: Display {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
