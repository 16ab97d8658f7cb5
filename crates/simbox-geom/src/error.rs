// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for box geometry operations.
//!
//! Every fallible operation validates before it mutates, so receiving one of
//! these errors means the box is exactly as it was before the call.

use thiserror::Error;

/// Errors raised by `SimBox` setters, matrix decoding and resizing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoxError {
    /// A vector-valued argument did not have exactly three components.
    #[error("invalid argument shape: expected 3 components, got {found}")]
    InvalidArgumentShape {
        /// Number of components actually supplied.
        found: usize,
    },
    /// A box matrix has a nonzero entry below the diagonal.
    #[error("invalid matrix shape: entry ({row}, {col}) is {value}, box matrices must be upper-triangular")]
    InvalidMatrixShape {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// Offending value.
        value: f64,
    },
    /// A dynamically sized matrix is not 3x3.
    #[error("invalid matrix dimensions: expected 3x3, got {rows}x{cols}")]
    MatrixDimensions {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first row that is not 3 long (or 3 when only `rows` is wrong).
        cols: usize,
    },
    /// Volume was assigned while the current volume is not positive.
    #[error("degenerate box: cannot rescale a box with volume {volume}")]
    DegenerateBox {
        /// Volume of the box at the time of the call.
        volume: f64,
    },
    /// A scale factor was zero, negative or not finite.
    #[error("invalid scale factor {value}: factors must be finite and positive")]
    InvalidScaleFactor {
        /// Offending factor.
        value: f64,
    },
    /// A target volume was zero, negative or not finite.
    #[error("invalid target volume {value}: volume must be finite and positive")]
    InvalidVolume {
        /// Offending target volume.
        value: f64,
    },
}

/// Disagreement between the authoritative box and its native mirror.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MirrorError {
    /// A reduced parameter read back from the mirror differs from the box.
    #[error("mirror mismatch on {field}: box has {core}, mirror has {mirror}")]
    Mismatch {
        /// Name of the parameter (`Lx`, `Ly`, `Lz`, `xy`, `xz`, `yz`).
        field: &'static str,
        /// Value held by the box.
        core: f64,
        /// Value reported by the mirror.
        mirror: f64,
    },
}
