// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod order;

pub mod consts;

pub use loader::{parse_args, parse_order, Invocation};
pub use order::BuildOrder;
