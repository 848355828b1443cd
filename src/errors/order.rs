// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for reading a build order from command-line arguments or inline YAML.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    /// A flag that takes a value was given without one.
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Invalid seat count '{0}': expected a non-negative integer")]
    InvalidSeatCount(String),

    #[error("Invalid steering side '{0}': expected 'left' or 'right'")]
    InvalidSteeringSide(String),

    #[error("Invalid GPS flag '{0}': expected 'gps' or 'no-gps'")]
    InvalidGpsFlag(String),

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// The inline order could not be parsed.
    #[error("Invalid order YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
