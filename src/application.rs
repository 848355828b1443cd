// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ties the director and the two builders together for one build order.

use std::fmt;

use crate::builders::{ManualBuilder, VehicleBuilder};
use crate::config::BuildOrder;
use crate::engine::Director;
use crate::errors::BuildError;
use crate::products::{ManualText, VehicleConfig};
use crate::traits::Builder;

/// Both products built from the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub vehicle: VehicleConfig,
    pub manual: ManualText,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vehicle)?;
        write!(f, "{}", self.manual)
    }
}

#[derive(Debug, Default)]
pub struct Application {
    director: Director,
}

impl Application {
    pub fn new() -> Self {
        Self {
            director: Director::new(),
        }
    }

    /// Runs the director once against a fresh [`VehicleBuilder`] and once
    /// against a fresh [`ManualBuilder`], with the same order.
    pub fn make_vehicle(&self, order: &BuildOrder) -> Result<Delivery, BuildError> {
        let mut vehicle_builder = VehicleBuilder::new();
        self.director.construct_from_order(&mut vehicle_builder, order)?;
        let vehicle = vehicle_builder.take_result()?;

        let mut manual_builder = ManualBuilder::new();
        self.director.construct_from_order(&mut manual_builder, order)?;
        let manual = manual_builder.take_result()?;

        Ok(Delivery { vehicle, manual })
    }
}
