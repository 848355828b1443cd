// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::builders::workbench::{Draft, Workbench};
use crate::errors::BuildError;
use crate::products::{SteeringSide, VehicleConfig};
use crate::traits::{BuildStage, Builder};

#[derive(Debug, Default)]
struct VehicleDraft {
    seats: Option<u32>,
    engine: Option<String>,
    steering: Option<SteeringSide>,
    gps: Option<bool>,
}

impl Draft for VehicleDraft {
    type Product = VehicleConfig;

    fn assemble(&self) -> Result<VehicleConfig, Vec<&'static str>> {
        match (self.seats, &self.engine, self.steering, self.gps) {
            (Some(seats), Some(engine), Some(steering), Some(gps)) => {
                Ok(VehicleConfig::new(seats, engine.clone(), steering, gps))
            }
            _ => {
                let mut missing = Vec::new();
                if self.seats.is_none() {
                    missing.push("seat count");
                }
                if self.engine.is_none() {
                    missing.push("engine");
                }
                if self.steering.is_none() {
                    missing.push("steering side");
                }
                if self.gps.is_none() {
                    missing.push("gps");
                }
                Err(missing)
            }
        }
    }
}

/// Vehicle builder - records each value verbatim into a [`VehicleConfig`].
pub struct VehicleBuilder {
    bench: Workbench<VehicleDraft>,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self {
            bench: Workbench::new("vehicle"),
        }
    }
}

impl Default for VehicleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for VehicleBuilder {
    type Product = VehicleConfig;

    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn stage(&self) -> BuildStage {
        self.bench.stage()
    }

    fn reset(&mut self) {
        self.bench.reset();
    }

    fn set_seat_count(&mut self, seats: u32) -> Result<(), BuildError> {
        self.bench.record("set_seat_count", |draft| draft.seats = Some(seats))
    }

    fn set_engine(&mut self, engine: &str) -> Result<(), BuildError> {
        self.bench
            .record("set_engine", |draft| draft.engine = Some(engine.to_string()))
    }

    fn set_steering_side(&mut self, side: SteeringSide) -> Result<(), BuildError> {
        self.bench
            .record("set_steering_side", |draft| draft.steering = Some(side))
    }

    fn set_gps(&mut self, present: bool) -> Result<(), BuildError> {
        self.bench.record("set_gps", |draft| draft.gps = Some(present))
    }

    fn take_result(&mut self) -> Result<VehicleConfig, BuildError> {
        self.bench.deliver()
    }
}
