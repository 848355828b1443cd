// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BuildError;
use crate::products::SteeringSide;
use crate::traits::{BuildStage, Builder};

/// A builder that records every call it receives, for checking the order a
/// caller drives the protocol in.
pub struct RecordingBuilder {
    pub calls: Vec<String>,
    fail_on: Option<&'static str>,
    stage: BuildStage,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
            stage: BuildStage::Uninitialized,
        }
    }

    /// A recorder that rejects `operation` with a protocol violation.
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::new()
        }
    }

    fn call(&mut self, operation: &'static str, entry: String) -> Result<(), BuildError> {
        if self.fail_on == Some(operation) {
            return Err(BuildError::ProtocolViolation {
                builder: "recording",
                operation,
                stage: self.stage,
            });
        }
        self.calls.push(entry);
        Ok(())
    }
}

impl Builder for RecordingBuilder {
    type Product = Vec<String>;

    fn name(&self) -> &'static str {
        "recording"
    }

    fn stage(&self) -> BuildStage {
        self.stage
    }

    fn reset(&mut self) {
        self.calls.push("reset".to_string());
        self.stage = BuildStage::Configuring;
    }

    fn set_seat_count(&mut self, seats: u32) -> Result<(), BuildError> {
        self.call("set_seat_count", format!("set_seat_count({})", seats))
    }

    fn set_engine(&mut self, engine: &str) -> Result<(), BuildError> {
        self.call("set_engine", format!("set_engine({})", engine))
    }

    fn set_steering_side(&mut self, side: SteeringSide) -> Result<(), BuildError> {
        self.call("set_steering_side", format!("set_steering_side({})", side))
    }

    fn set_gps(&mut self, present: bool) -> Result<(), BuildError> {
        self.call("set_gps", format!("set_gps({})", present))
    }

    fn take_result(&mut self) -> Result<Vec<String>, BuildError> {
        self.stage = BuildStage::Complete;
        Ok(std::mem::take(&mut self.calls))
    }
}
