// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::warn;

use crate::codec;
use crate::error::BoxError;
use crate::types::{Axis, AxisTriple, BoxParams, Mat3};

/// Periodic simulation box: a parallelepiped given by three edge lengths and
/// three tilt factors, plus per-axis periodicity.
///
/// Invariants:
/// - The reduced parameters are the only stored geometry. [`SimBox::matrix`]
///   and [`SimBox::lattice_vectors`] are derived on every call.
/// - Length and tilt setters store the value verbatim. Negative lengths are
///   accepted (and logged) so callers that need non-negative extents must
///   check for themselves.
/// - Fallible setters validate first and leave the box untouched on error.
///
/// Equality compares the six reduced parameters exactly; periodic flags are
/// not part of it. A value matches itself bit for bit, so equality stays
/// reflexive when a parameter is NaN, and `0.0` matches `-0.0`.
#[derive(Debug, Copy, Clone)]
pub struct SimBox {
    params: BoxParams,
    periodic: [bool; 3],
}

impl SimBox {
    /// Orthorhombic box with the given edge lengths and zero tilt.
    #[must_use]
    pub fn new(lx: f64, ly: f64, lz: f64) -> Self {
        Self::with_tilts(lx, ly, lz, 0.0, 0.0, 0.0)
    }

    /// Triclinic box from all six reduced parameters.
    #[must_use]
    pub fn with_tilts(lx: f64, ly: f64, lz: f64, xy: f64, xz: f64, yz: f64) -> Self {
        Self::from_params(BoxParams {
            lx,
            ly,
            lz,
            xy,
            xz,
            yz,
        })
    }

    /// Box from a parameter set, fully periodic.
    #[must_use]
    pub fn from_params(params: BoxParams) -> Self {
        for (name, value) in [("Lx", params.lx), ("Ly", params.ly), ("Lz", params.lz)] {
            warn_negative(name, value);
        }
        Self {
            params,
            periodic: [true; 3],
        }
    }

    /// Cubic box of edge `l`.
    #[must_use]
    pub fn cube(l: f64) -> Self {
        Self::new(l, l, l)
    }

    /// Square 2-D box of edge `l` (`Lz = 0`).
    #[must_use]
    pub fn square(l: f64) -> Self {
        Self::new(l, l, 0.0)
    }

    /// Box decoded from an upper-triangular matrix, fully periodic.
    pub fn from_matrix(matrix: impl Into<Mat3>) -> Result<Self, BoxError> {
        codec::decode(&matrix.into()).map(Self::from_params)
    }

    /// Snapshot of the six reduced parameters.
    #[must_use]
    pub const fn params(&self) -> BoxParams {
        self.params
    }

    /// Edge length along x.
    #[must_use]
    pub const fn lx(&self) -> f64 {
        self.params.lx
    }

    /// Edge length along y.
    #[must_use]
    pub const fn ly(&self) -> f64 {
        self.params.ly
    }

    /// Edge length along z.
    #[must_use]
    pub const fn lz(&self) -> f64 {
        self.params.lz
    }

    /// Tilt factor xy.
    #[must_use]
    pub const fn xy(&self) -> f64 {
        self.params.xy
    }

    /// Tilt factor xz.
    #[must_use]
    pub const fn xz(&self) -> f64 {
        self.params.xz
    }

    /// Tilt factor yz.
    #[must_use]
    pub const fn yz(&self) -> f64 {
        self.params.yz
    }

    /// Sets the edge length along x.
    pub fn set_lx(&mut self, lx: f64) {
        warn_negative("Lx", lx);
        self.params.lx = lx;
    }

    /// Sets the edge length along y.
    pub fn set_ly(&mut self, ly: f64) {
        warn_negative("Ly", ly);
        self.params.ly = ly;
    }

    /// Sets the edge length along z. Zero makes the box 2-D.
    pub fn set_lz(&mut self, lz: f64) {
        warn_negative("Lz", lz);
        self.params.lz = lz;
    }

    /// Sets the xy tilt factor.
    pub fn set_xy(&mut self, xy: f64) {
        self.params.xy = xy;
    }

    /// Sets the xz tilt factor.
    pub fn set_xz(&mut self, xz: f64) {
        self.params.xz = xz;
    }

    /// Sets the yz tilt factor.
    pub fn set_yz(&mut self, yz: f64) {
        self.params.yz = yz;
    }

    /// Edge lengths `(Lx, Ly, Lz)`.
    #[must_use]
    pub const fn l(&self) -> [f64; 3] {
        self.params.lengths()
    }

    /// Sets all edge lengths from a scalar (broadcast) or a 3-component value.
    pub fn set_l(&mut self, l: impl AxisTriple) -> Result<(), BoxError> {
        let [lx, ly, lz] = l.into_triple()?;
        self.set_lx(lx);
        self.set_ly(ly);
        self.set_lz(lz);
        Ok(())
    }

    /// Tilt factors `(xy, xz, yz)`.
    #[must_use]
    pub const fn tilts(&self) -> [f64; 3] {
        self.params.tilts()
    }

    /// Sets all tilt factors from a scalar (broadcast) or a 3-component value.
    pub fn set_tilts(&mut self, tilts: impl AxisTriple) -> Result<(), BoxError> {
        let [xy, xz, yz] = tilts.into_triple()?;
        self.params.xy = xy;
        self.params.xz = xz;
        self.params.yz = yz;
        Ok(())
    }

    /// Upper-triangular box matrix; columns are the lattice vectors.
    #[must_use]
    pub fn matrix(&self) -> Mat3 {
        codec::encode(&self.params)
    }

    /// Replaces lengths and tilts with those decoded from `matrix`.
    ///
    /// Periodic flags are kept.
    pub fn set_matrix(&mut self, matrix: impl Into<Mat3>) -> Result<(), BoxError> {
        let params = codec::decode(&matrix.into())?;
        tracing::debug!(?params, "box matrix assigned");
        self.set_l(params.lengths())?;
        self.set_tilts(params.tilts())
    }

    /// Lattice vectors `a1`, `a2`, `a3` as rows.
    #[must_use]
    pub fn lattice_vectors(&self) -> [[f64; 3]; 3] {
        codec::lattice_vectors(&self.params)
    }

    /// `Lx * Ly * Lz`; tilts do not change it.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.params.lx * self.params.ly * self.params.lz
    }

    /// `true` when `Lz == 0`.
    #[must_use]
    pub fn is_2d(&self) -> bool {
        self.params.lz == 0.0
    }

    /// `2` for a 2-D box, `3` otherwise.
    #[must_use]
    pub fn dimensions(&self) -> u8 {
        if self.is_2d() {
            2
        } else {
            3
        }
    }

    /// Per-axis periodicity flags.
    #[must_use]
    pub const fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Sets all periodicity flags.
    pub fn set_periodic(&mut self, periodic: [bool; 3]) {
        self.periodic = periodic;
    }

    /// Sets periodicity along a single axis.
    pub fn set_periodic_axis(&mut self, axis: Axis, periodic: bool) {
        self.periodic[axis.index()] = periodic;
    }

    pub(crate) fn replace_params(&mut self, params: BoxParams) {
        self.params = params;
    }
}

impl PartialEq for SimBox {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl From<BoxParams> for SimBox {
    fn from(params: BoxParams) -> Self {
        Self::from_params(params)
    }
}

impl fmt::Display for SimBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(
            f,
            "SimBox(Lx={}, Ly={}, Lz={}, xy={}, xz={}, yz={})",
            p.lx, p.ly, p.lz, p.xy, p.xz, p.yz
        )
    }
}

fn warn_negative(field: &'static str, value: f64) {
    if value < 0.0 {
        warn!(field, value, "negative box length stored");
    }
}
