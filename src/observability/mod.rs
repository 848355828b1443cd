// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic event emitted by the builders and the director is a
//! message struct with a `Display` implementation, so log text lives in one
//! place instead of being scattered through the construction code.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::builder` - builder lifecycle and protocol violations
//! * `messages::director` - construction runs driven by the director
//!
//! # Usage
//!
//! ```rust
//! use vehicle_builder::observability::messages::builder::BuilderReset;
//! use vehicle_builder::observability::messages::StructuredLog;
//!
//! BuilderReset { builder: "vehicle" }.log();
//! ```

pub mod messages;
