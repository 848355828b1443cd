use crate::products::SteeringSide;

/// Seat count used when an order does not name one
pub const DEFAULT_SEATS: u32 = 4;
/// Engine descriptor used when an order does not name one
pub const DEFAULT_ENGINE: &str = "V8";
/// Steering side used when an order does not name one
pub const DEFAULT_STEERING: SteeringSide = SteeringSide::Left;
/// GPS presence used when an order does not name it
pub const DEFAULT_GPS: bool = true;
/// Log filter applied when `RUST_LOG` is unset - keeps stdout renderings clean
pub const DEFAULT_LOG_FILTER: &str = "warn";
