// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::config::BuildOrder;
use crate::errors::BuildError;
use crate::observability::messages::{director::*, StructuredLog};
use crate::products::SteeringSide;
use crate::traits::Builder;

/// Drives any [`Builder`] through the fixed construction protocol:
///
/// 1. `reset`
/// 2. `set_seat_count`
/// 3. `set_engine`
/// 4. `set_steering_side`
/// 5. `set_gps`
///
/// The director is stateless and never holds a product; callers take the
/// result from the builder afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Runs the protocol with the given values.
    ///
    /// The first step a builder rejects stops the run and its error is
    /// returned unchanged.
    pub fn construct_product<B>(
        &self,
        builder: &mut B,
        seats: u32,
        engine: &str,
        steering: SteeringSide,
        gps: bool,
    ) -> Result<(), BuildError>
    where
        B: Builder + ?Sized,
    {
        let started = ConstructionStarted {
            builder: builder.name(),
            seats,
            engine,
            steering,
            gps,
        };

        let span = started.span("construct_product");
        let _guard = span.enter();
        started.log();

        let start_time = Instant::now();

        match Self::run_protocol(builder, seats, engine, steering, gps) {
            Ok(()) => {
                ConstructionCompleted {
                    builder: builder.name(),
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(())
            }
            Err(error) => {
                ConstructionFailed {
                    builder: builder.name(),
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }

    /// Runs the protocol with the values of `order`.
    pub fn construct_from_order<B>(&self, builder: &mut B, order: &BuildOrder) -> Result<(), BuildError>
    where
        B: Builder + ?Sized,
    {
        self.construct_product(builder, order.seats, &order.engine, order.steering, order.gps)
    }

    fn run_protocol<B>(
        builder: &mut B,
        seats: u32,
        engine: &str,
        steering: SteeringSide,
        gps: bool,
    ) -> Result<(), BuildError>
    where
        B: Builder + ?Sized,
    {
        builder.reset();
        builder.set_seat_count(seats)?;
        builder.set_engine(engine)?;
        builder.set_steering_side(steering)?;
        builder.set_gps(gps)?;
        Ok(())
    }
}
