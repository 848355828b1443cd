// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete builders for the [`Builder`](crate::traits::Builder) capability.
//!
//! * [`VehicleBuilder`] records raw values into a [`VehicleConfig`](crate::products::VehicleConfig).
//! * [`ManualBuilder`] turns each value into a sentence of a
//!   [`ManualText`](crate::products::ManualText).
//!
//! Both share the same lifecycle bookkeeping (`workbench`), so protocol
//! violations are detected and reported identically.
//!
//! # Example
//! ```rust
//! use vehicle_builder::builders::VehicleBuilder;
//! use vehicle_builder::products::SteeringSide;
//! use vehicle_builder::traits::Builder;
//!
//! let mut builder = VehicleBuilder::new();
//! builder.reset();
//! builder.set_seat_count(4)?;
//! builder.set_engine("V8")?;
//! builder.set_steering_side(SteeringSide::Left)?;
//! builder.set_gps(true)?;
//!
//! let vehicle = builder.take_result()?;
//! assert_eq!(vehicle.seats(), 4);
//! # Ok::<(), vehicle_builder::errors::BuildError>(())
//! ```

pub mod manual;
#[cfg(test)]
pub mod stub;
pub mod vehicle;
mod workbench;

pub use manual::ManualBuilder;
pub use vehicle::VehicleBuilder;
