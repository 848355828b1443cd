pub mod builder;

pub use builder::{BuildStage, Builder};
