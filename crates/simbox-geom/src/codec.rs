// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Conversion between reduced box parameters and the box matrix.
//!
//! The box matrix has the lattice vectors as columns:
//!
//! ```text
//! [ Lx   Ly*xy  Lz*xz ]
//! [ 0    Ly     Lz*yz ]
//! [ 0    0      Lz    ]
//! ```
//!
//! Both `encode` and `lattice_vectors` read the same six parameters, so the two
//! views cannot drift apart. Tilts are recovered by dividing the off-diagonal
//! entries by the matching diagonal length; a zero length yields a zero tilt.

use crate::error::BoxError;
use crate::types::{BoxParams, Mat3};

/// Builds the upper-triangular box matrix for `p`.
#[must_use]
pub fn encode(p: &BoxParams) -> Mat3 {
    Mat3::new([
        [p.lx, p.ly * p.xy, p.lz * p.xz],
        [0.0, p.ly, p.lz * p.yz],
        [0.0, 0.0, p.lz],
    ])
}

/// Recovers reduced parameters from an upper-triangular box matrix.
///
/// Fails with [`BoxError::InvalidMatrixShape`] naming the first nonzero entry
/// below the diagonal.
pub fn decode(m: &Mat3) -> Result<BoxParams, BoxError> {
    if let Some((row, col, value)) = m.first_subdiagonal_nonzero() {
        return Err(BoxError::InvalidMatrixShape { row, col, value });
    }
    let r = m.to_rows();
    let [lx, ly, lz] = m.diagonal();
    Ok(BoxParams {
        lx,
        ly,
        lz,
        xy: tilt(r[0][1], ly),
        xz: tilt(r[0][2], lz),
        yz: tilt(r[1][2], lz),
    })
}

/// Lattice vectors `a1`, `a2`, `a3` as rows.
///
/// Equal to the columns of [`encode`], computed directly from `p`.
#[must_use]
pub fn lattice_vectors(p: &BoxParams) -> [[f64; 3]; 3] {
    [
        [p.lx, 0.0, 0.0],
        [p.ly * p.xy, p.ly, 0.0],
        [p.lz * p.xz, p.lz * p.yz, p.lz],
    ]
}

fn tilt(offset: f64, length: f64) -> f64 {
    if length == 0.0 {
        0.0
    } else {
        offset / length
    }
}
