// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed construction parameters for a [`SimBox`].

use serde::{Deserialize, Serialize};

use crate::types::{BoxParams, SimBox};

/// Named construction parameters for a box.
///
/// Lengths are required. Tilts default to `0` and periodicity to `true` on
/// every axis. Serialized field names are `Lx`, `Ly`, `Lz`, `xy`, `xz`, `yz`
/// and `periodic`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxConfig {
    /// Edge length along x.
    #[serde(rename = "Lx")]
    pub lx: f64,
    /// Edge length along y.
    #[serde(rename = "Ly")]
    pub ly: f64,
    /// Edge length along z; `0` for a 2-D box.
    #[serde(rename = "Lz")]
    pub lz: f64,
    /// Tilt factor xy.
    #[serde(default)]
    pub xy: f64,
    /// Tilt factor xz.
    #[serde(default)]
    pub xz: f64,
    /// Tilt factor yz.
    #[serde(default)]
    pub yz: f64,
    /// Per-axis periodicity.
    #[serde(default = "all_periodic")]
    pub periodic: [bool; 3],
}

const fn all_periodic() -> [bool; 3] {
    [true; 3]
}

impl BoxConfig {
    /// Untilted, fully periodic config with the given lengths.
    #[must_use]
    pub const fn new(lx: f64, ly: f64, lz: f64) -> Self {
        Self {
            lx,
            ly,
            lz,
            xy: 0.0,
            xz: 0.0,
            yz: 0.0,
            periodic: all_periodic(),
        }
    }

    /// The six reduced parameters.
    #[must_use]
    pub const fn params(&self) -> BoxParams {
        BoxParams {
            lx: self.lx,
            ly: self.ly,
            lz: self.lz,
            xy: self.xy,
            xz: self.xz,
            yz: self.yz,
        }
    }
}

impl SimBox {
    /// Builds a box from a config.
    #[must_use]
    pub fn from_config(config: &BoxConfig) -> Self {
        let mut b = Self::from_params(config.params());
        b.set_periodic(config.periodic);
        b
    }

    /// Captures the box as a config.
    #[must_use]
    pub fn to_config(&self) -> BoxConfig {
        let p = self.params();
        BoxConfig {
            lx: p.lx,
            ly: p.ly,
            lz: p.lz,
            xy: p.xy,
            xz: p.xz,
            yz: p.yz,
            periodic: self.periodic(),
        }
    }
}

impl From<&BoxConfig> for SimBox {
    fn from(config: &BoxConfig) -> Self {
        Self::from_config(config)
    }
}
