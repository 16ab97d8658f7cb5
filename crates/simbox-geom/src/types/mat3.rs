// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::BoxError;

/// Row-major 3x3 matrix of `f64`.
///
/// Indexing is `(row, col)`. Box matrices produced by this crate are always
/// upper-triangular; arbitrary matrices may still be constructed so that
/// decoding can reject them with a precise error.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows as a nested array.
    #[must_use]
    pub const fn to_rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Entry at `(row, col)`, or `None` when either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Diagonal entries.
    #[must_use]
    pub const fn diagonal(&self) -> [f64; 3] {
        [self.rows[0][0], self.rows[1][1], self.rows[2][2]]
    }

    /// Transposed copy (columns become rows).
    #[must_use]
    pub fn transpose(&self) -> Self {
        let r = &self.rows;
        Self::new([
            [r[0][0], r[1][0], r[2][0]],
            [r[0][1], r[1][1], r[2][1]],
            [r[0][2], r[1][2], r[2][2]],
        ])
    }

    /// First nonzero entry below the diagonal, scanned `(1,0)`, `(2,0)`, `(2,1)`.
    #[must_use]
    pub fn first_subdiagonal_nonzero(&self) -> Option<(usize, usize, f64)> {
        [(1, 0), (2, 0), (2, 1)]
            .into_iter()
            .map(|(r, c)| (r, c, self.rows[r][c]))
            .find(|&(_, _, v)| v != 0.0)
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

impl From<Mat3> for [[f64; 3]; 3] {
    fn from(m: Mat3) -> Self {
        m.rows
    }
}

impl TryFrom<&[Vec<f64>]> for Mat3 {
    type Error = BoxError;

    fn try_from(rows: &[Vec<f64>]) -> Result<Self, Self::Error> {
        if rows.len() != 3 {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(BoxError::MatrixDimensions {
                rows: rows.len(),
                cols,
            });
        }
        let mut out = [[0.0; 3]; 3];
        for (dst, src) in out.iter_mut().zip(rows) {
            *dst = <[f64; 3]>::try_from(src.as_slice()).map_err(|_| {
                BoxError::MatrixDimensions {
                    rows: 3,
                    cols: src.len(),
                }
            })?;
        }
        Ok(Self::new(out))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Mat3 {
    type Error = BoxError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::try_from(rows.as_slice())
    }
}
