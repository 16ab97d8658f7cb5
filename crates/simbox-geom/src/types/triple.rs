// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::BoxError;

/// One of the three box axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis (`Lx`).
    X,
    /// Second axis (`Ly`).
    Y,
    /// Third axis (`Lz`).
    Z,
}

impl Axis {
    /// Index of this axis into a `[_; 3]` triple.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Values accepted wherever a per-axis triple is expected.
///
/// A bare `f64` is broadcast to all three axes. Arrays are taken as-is.
/// Slices and vectors must hold exactly three components; anything else is
/// rejected with [`BoxError::InvalidArgumentShape`].
pub trait AxisTriple {
    /// Resolves the argument into three per-axis values.
    fn into_triple(self) -> Result<[f64; 3], BoxError>;
}

impl AxisTriple for f64 {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        Ok([self; 3])
    }
}

impl AxisTriple for [f64; 3] {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        Ok(self)
    }
}

impl AxisTriple for &[f64; 3] {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        Ok(*self)
    }
}

impl AxisTriple for &[f64] {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        <[f64; 3]>::try_from(self).map_err(|_| BoxError::InvalidArgumentShape { found: self.len() })
    }
}

impl AxisTriple for Vec<f64> {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        self.as_slice().into_triple()
    }
}

impl AxisTriple for &Vec<f64> {
    fn into_triple(self) -> Result<[f64; 3], BoxError> {
        self.as_slice().into_triple()
    }
}
