// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// A user manual: one sentence per configured aspect of the vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualText {
    seats: String,
    engine: String,
    steering: String,
    gps: String,
}

impl ManualText {
    pub(crate) fn new(seats: String, engine: String, steering: String, gps: String) -> Self {
        Self {
            seats,
            engine,
            steering,
            gps,
        }
    }

    pub fn seats(&self) -> &str {
        &self.seats
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn steering(&self) -> &str {
        &self.steering
    }

    pub fn gps(&self) -> &str {
        &self.gps
    }

    /// The four sentences in seats, engine, steering, GPS order.
    pub fn sentences(&self) -> [&str; 4] {
        [&self.seats, &self.engine, &self.steering, &self.gps]
    }
}

impl fmt::Display for ManualText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Manual:")?;
        writeln!(f, "Seats: {}", self.seats)?;
        writeln!(f, "Engine: {}", self.engine)?;
        writeln!(f, "Steering: {}", self.steering)?;
        write!(f, "GPS: {}", self.gps)
    }
}
