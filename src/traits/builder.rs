use std::fmt;

use crate::errors::BuildError;
use crate::products::SteeringSide;

/// Lifecycle stage of a builder's in-progress product.
///
/// ```text
/// Uninitialized --reset--> Configuring --take_result--> Complete
///                              ^  |                         |
///                              |  +--setters (0..4)         |
///                              +----------reset-------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// No product has been started yet.
    Uninitialized,
    /// A fresh product exists and setters may record into it.
    Configuring,
    /// The product was handed out; only `reset` is accepted.
    Complete,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuildStage::Uninitialized => "uninitialized",
            BuildStage::Configuring => "configuring",
            BuildStage::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// The stepwise configuration capability shared by every builder.
///
/// Callers must `reset` before any setter and must record all four aspects
/// before `take_result`. Out-of-order calls return
/// [`BuildError::ProtocolViolation`] or [`BuildError::IncompleteProduct`].
pub trait Builder: Send {
    /// The representation this builder produces.
    type Product;

    fn name(&self) -> &'static str;

    fn stage(&self) -> BuildStage;

    /// Discards any in-progress product and starts a fresh one.
    fn reset(&mut self);

    fn set_seat_count(&mut self, seats: u32) -> Result<(), BuildError>;

    fn set_engine(&mut self, engine: &str) -> Result<(), BuildError>;

    fn set_steering_side(&mut self, side: SteeringSide) -> Result<(), BuildError>;

    fn set_gps(&mut self, present: bool) -> Result<(), BuildError>;

    /// Hands out the completed product, moving the builder to
    /// [`BuildStage::Complete`].
    fn take_result(&mut self) -> Result<Self::Product, BuildError>;
}
