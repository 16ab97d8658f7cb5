// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON report of a box and its derived views.

use serde::Serialize;
use simbox_geom::SimBox;

/// Everything `simbox` prints about a box.
#[derive(Debug, Serialize)]
pub struct BoxReport {
    #[serde(rename = "Lx")]
    lx: f64,
    #[serde(rename = "Ly")]
    ly: f64,
    #[serde(rename = "Lz")]
    lz: f64,
    xy: f64,
    xz: f64,
    yz: f64,
    periodic: [bool; 3],
    matrix: [[f64; 3]; 3],
    lattice_vectors: [[f64; 3]; 3],
    volume: f64,
    dimensions: u8,
    is_2d: bool,
}

impl From<&SimBox> for BoxReport {
    fn from(b: &SimBox) -> Self {
        Self {
            lx: b.lx(),
            ly: b.ly(),
            lz: b.lz(),
            xy: b.xy(),
            xz: b.xz(),
            yz: b.yz(),
            periodic: b.periodic(),
            matrix: b.matrix().to_rows(),
            lattice_vectors: b.lattice_vectors(),
            volume: b.volume(),
            dimensions: b.dimensions(),
            is_2d: b.is_2d(),
        }
    }
}
