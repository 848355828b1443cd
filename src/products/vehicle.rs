// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::OrderError;

/// Which side of the vehicle the steering wheel is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SteeringSide {
    Left,
    Right,
}

impl SteeringSide {
    /// `left-hand` or `right-hand`.
    pub fn hand(&self) -> &'static str {
        match self {
            SteeringSide::Left => "left-hand",
            SteeringSide::Right => "right-hand",
        }
    }
}

impl fmt::Display for SteeringSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SteeringSide::Left => f.write_str("left"),
            SteeringSide::Right => f.write_str("right"),
        }
    }
}

impl FromStr for SteeringSide {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(SteeringSide::Left),
            "right" | "r" => Ok(SteeringSide::Right),
            _ => Err(OrderError::InvalidSteeringSide(s.to_string())),
        }
    }
}

/// A fully configured vehicle.
///
/// Instances only exist once all four aspects were recorded; see
/// [`crate::builders::VehicleBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleConfig {
    seats: u32,
    engine: String,
    steering: SteeringSide,
    gps: bool,
}

impl VehicleConfig {
    pub(crate) fn new(seats: u32, engine: String, steering: SteeringSide, gps: bool) -> Self {
        Self {
            seats,
            engine,
            steering,
            gps,
        }
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn steering(&self) -> SteeringSide {
        self.steering
    }

    pub fn has_gps(&self) -> bool {
        self.gps
    }
}

impl fmt::Display for VehicleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vehicle with {} seats, {} engine, {}-drive, {} GPS.",
            self.seats,
            self.engine,
            self.steering.hand(),
            if self.gps { "with" } else { "without" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_left_hand_with_gps() {
        let vehicle = VehicleConfig::new(4, "V8".to_string(), SteeringSide::Left, true);
        assert_eq!(
            vehicle.to_string(),
            "Vehicle with 4 seats, V8 engine, left-hand-drive, with GPS."
        );
    }

    #[test]
    fn test_renders_right_hand_without_gps() {
        let vehicle = VehicleConfig::new(2, "electric".to_string(), SteeringSide::Right, false);
        assert_eq!(
            vehicle.to_string(),
            "Vehicle with 2 seats, electric engine, right-hand-drive, without GPS."
        );
    }

    #[test]
    fn test_renders_seat_count_without_clamping() {
        let empty = VehicleConfig::new(0, "V6".to_string(), SteeringSide::Left, true);
        assert!(empty.to_string().starts_with("Vehicle with 0 seats,"));

        let bus = VehicleConfig::new(u32::MAX, "diesel".to_string(), SteeringSide::Right, true);
        assert!(bus.to_string().contains(&format!("with {} seats,", u32::MAX)));
    }

    #[test]
    fn test_steering_side_parsing() {
        assert_eq!("left".parse::<SteeringSide>().unwrap(), SteeringSide::Left);
        assert_eq!("RIGHT".parse::<SteeringSide>().unwrap(), SteeringSide::Right);
        assert_eq!(" r ".parse::<SteeringSide>().unwrap(), SteeringSide::Right);
        assert_eq!("L".parse::<SteeringSide>().unwrap(), SteeringSide::Left);

        let err = "center".parse::<SteeringSide>().unwrap_err();
        assert!(matches!(err, OrderError::InvalidSteeringSide(ref s) if s == "center"));
    }

    #[test]
    fn test_steering_side_display_round_trips_through_parse() {
        for side in [SteeringSide::Left, SteeringSide::Right] {
            assert_eq!(side.to_string().parse::<SteeringSide>().unwrap(), side);
        }
    }
}
