// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod director;

#[cfg(test)]
mod integration_tests;

pub use director::Director;
