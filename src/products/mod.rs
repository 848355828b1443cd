// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The two representations a build order can be turned into.
//!
//! Products are plain data. Their `Display` implementations are pure
//! functions of the completed fields, kept apart from the builders that
//! assemble them.

pub mod manual;
pub mod vehicle;

pub use manual::ManualText;
pub use vehicle::{SteeringSide, VehicleConfig};
