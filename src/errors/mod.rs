// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod build;
mod order;

pub use build::BuildError;
pub use order::OrderError;
