// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::builders::workbench::{Draft, Workbench};
use crate::errors::BuildError;
use crate::products::{ManualText, SteeringSide};
use crate::traits::{BuildStage, Builder};

pub const GPS_PRESENT: &str = "This vehicle is equipped with GPS.";
pub const GPS_ABSENT: &str = "This vehicle is not equipped with GPS.";

pub fn seats_sentence(seats: u32) -> String {
    format!("This vehicle has {} seats.", seats)
}

pub fn engine_sentence(engine: &str) -> String {
    format!("This vehicle is equipped with a {} engine.", engine)
}

pub fn steering_sentence(side: SteeringSide) -> String {
    format!("This vehicle is {} drive.", side.hand())
}

pub fn gps_sentence(present: bool) -> &'static str {
    if present {
        GPS_PRESENT
    } else {
        GPS_ABSENT
    }
}

#[derive(Debug, Default)]
struct ManualDraft {
    seats: Option<String>,
    engine: Option<String>,
    steering: Option<String>,
    gps: Option<String>,
}

impl Draft for ManualDraft {
    type Product = ManualText;

    fn assemble(&self) -> Result<ManualText, Vec<&'static str>> {
        if let (Some(seats), Some(engine), Some(steering), Some(gps)) =
            (&self.seats, &self.engine, &self.steering, &self.gps)
        {
            return Ok(ManualText::new(
                seats.clone(),
                engine.clone(),
                steering.clone(),
                gps.clone(),
            ));
        }

        let aspects = [
            ("seat count", &self.seats),
            ("engine", &self.engine),
            ("steering side", &self.steering),
            ("gps", &self.gps),
        ];
        Err(aspects
            .iter()
            .filter(|(_, sentence)| sentence.is_none())
            .map(|(aspect, _)| *aspect)
            .collect())
    }
}

/// Manual builder - writes one descriptive sentence per configured aspect.
pub struct ManualBuilder {
    bench: Workbench<ManualDraft>,
}

impl ManualBuilder {
    pub fn new() -> Self {
        Self {
            bench: Workbench::new("manual"),
        }
    }
}

impl Default for ManualBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for ManualBuilder {
    type Product = ManualText;

    fn name(&self) -> &'static str {
        "manual"
    }

    fn stage(&self) -> BuildStage {
        self.bench.stage()
    }

    fn reset(&mut self) {
        self.bench.reset();
    }

    fn set_seat_count(&mut self, seats: u32) -> Result<(), BuildError> {
        self.bench
            .record("set_seat_count", |draft| draft.seats = Some(seats_sentence(seats)))
    }

    fn set_engine(&mut self, engine: &str) -> Result<(), BuildError> {
        self.bench
            .record("set_engine", |draft| draft.engine = Some(engine_sentence(engine)))
    }

    fn set_steering_side(&mut self, side: SteeringSide) -> Result<(), BuildError> {
        self.bench.record("set_steering_side", |draft| {
            draft.steering = Some(steering_sentence(side))
        })
    }

    fn set_gps(&mut self, present: bool) -> Result<(), BuildError> {
        self.bench
            .record("set_gps", |draft| draft.gps = Some(gps_sentence(present).to_string()))
    }

    fn take_result(&mut self) -> Result<ManualText, BuildError> {
        self.bench.deliver()
    }
}
