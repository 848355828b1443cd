// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised when a builder is driven out of its reset → configure →
//! retrieve order.

use thiserror::Error;

use crate::traits::BuildStage;

/// Errors that can occur while driving a builder.
///
/// Both variants are protocol violations: the builder was asked to do
/// something its current lifecycle stage does not allow. Nothing is
/// recovered internally; the caller decides what to do next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A setter or retrieval was called while no product is being configured
    /// (before the first `reset`, or after the product was already taken).
    #[error("Builder '{builder}' cannot {operation} while {stage}; call reset() to start a new product")]
    ProtocolViolation {
        builder: &'static str,
        operation: &'static str,
        stage: BuildStage,
    },

    /// The product was requested before every aspect had been recorded.
    #[error("Builder '{builder}' cannot deliver its product yet: missing {}", .missing.join(", "))]
    IncompleteProduct {
        builder: &'static str,
        missing: Vec<&'static str>,
    },
}
