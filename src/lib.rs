// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod application; // runs the director once per builder
pub mod builders;    // concrete builders
pub mod config;      // build orders + argument parsing
pub mod engine;      // director
pub mod errors;      // error handling
pub mod observability;
pub mod products;    // vehicle + manual
pub mod traits;      // builder capability
