// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// The six reduced parameters of a triclinic box.
///
/// This is the canonical state: the matrix and lattice-vector views are
/// derived from it on demand and never stored alongside it. Equality is exact
/// over all six fields: two values match when they compare equal or share a
/// bit pattern, so `0.0 == -0.0` and a NaN equals itself.
#[derive(Debug, Copy, Clone, Default)]
pub struct BoxParams {
    /// Edge length along x.
    pub lx: f64,
    /// Edge length along y.
    pub ly: f64,
    /// Edge length along z; `0` marks a 2-D box.
    pub lz: f64,
    /// Tilt of the second basis vector along x.
    pub xy: f64,
    /// Tilt of the third basis vector along x.
    pub xz: f64,
    /// Tilt of the third basis vector along y.
    pub yz: f64,
}

impl BoxParams {
    /// Builds parameters from a length triple and a tilt triple.
    #[must_use]
    pub const fn from_parts(l: [f64; 3], tilts: [f64; 3]) -> Self {
        Self {
            lx: l[0],
            ly: l[1],
            lz: l[2],
            xy: tilts[0],
            xz: tilts[1],
            yz: tilts[2],
        }
    }

    /// Edge lengths `(Lx, Ly, Lz)`.
    #[must_use]
    pub const fn lengths(&self) -> [f64; 3] {
        [self.lx, self.ly, self.lz]
    }

    /// Tilt factors `(xy, xz, yz)`.
    #[must_use]
    pub const fn tilts(&self) -> [f64; 3] {
        [self.xy, self.xz, self.yz]
    }

    /// Named fields in canonical order, for reporting and comparison.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("Lx", self.lx),
            ("Ly", self.ly),
            ("Lz", self.lz),
            ("xy", self.xy),
            ("xz", self.xz),
            ("yz", self.yz),
        ]
    }
}

impl PartialEq for BoxParams {
    fn eq(&self, other: &Self) -> bool {
        self.named()
            .into_iter()
            .zip(other.named())
            .all(|((_, a), (_, b))| same_value(a, b))
    }
}

/// Exact match used by box equality and mirror verification.
pub(crate) fn same_value(a: f64, b: f64) -> bool {
    a == b || a.to_bits() == b.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_reflexive_with_nan() {
        let p = BoxParams::from_parts([f64::NAN, 1.0, 2.0], [0.0, f64::NAN, 0.0]);
        let copy = p;
        assert_eq!(p, copy);
    }

    #[test]
    fn signed_zeros_match() {
        let a = BoxParams::from_parts([1.0, 1.0, 0.0], [0.0; 3]);
        let b = BoxParams::from_parts([1.0, 1.0, -0.0], [-0.0; 3]);
        assert_eq!(a, b);
        assert_ne!(a, BoxParams::from_parts([1.0, 1.0, 0.0], [0.5, 0.0, 0.0]));
    }
}
