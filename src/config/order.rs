// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_ENGINE, DEFAULT_GPS, DEFAULT_SEATS, DEFAULT_STEERING};
use crate::products::SteeringSide;

/// The one tuple of configuration values fed to every builder.
///
/// Keys missing from an inline YAML order fall back to [`BuildOrder::default`].
///
/// # Example
/// ```yaml
/// seats: 2
/// engine: electric
/// steering: right
/// gps: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOrder {
    pub seats: u32,
    pub engine: String,
    pub steering: SteeringSide,
    pub gps: bool,
}

impl Default for BuildOrder {
    fn default() -> Self {
        Self {
            seats: DEFAULT_SEATS,
            engine: DEFAULT_ENGINE.to_string(),
            steering: DEFAULT_STEERING,
            gps: DEFAULT_GPS,
        }
    }
}
