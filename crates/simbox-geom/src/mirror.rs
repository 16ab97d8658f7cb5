// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Synchronization port towards a native engine's copy of the box.
//!
//! The [`SimBox`] stays authoritative. A [`BoxMirror`] only receives pushes
//! and answers reads; [`MirroredBox`] pushes after every successful change to
//! lengths or tilts and can pull the mirror back to check that both sides
//! agree. Periodicity is not part of the pushed geometry.

use tracing::warn;

use crate::error::{BoxError, MirrorError};
use crate::types::{same_value, Axis, AxisTriple, BoxParams, Mat3, SimBox};

/// Native-side copy of the box geometry.
///
/// Implementors store whatever the engine needs; they are never consulted for
/// the box's own state except through [`MirroredBox::verify`].
pub trait BoxMirror {
    /// Receives the current reduced parameters.
    fn push(&mut self, params: &BoxParams);

    /// Edge lengths as the mirror sees them.
    fn l(&self) -> [f64; 3];

    /// Tilt factor xy as the mirror sees it.
    fn tilt_factor_xy(&self) -> f64;

    /// Tilt factor xz as the mirror sees it.
    fn tilt_factor_xz(&self) -> f64;

    /// Tilt factor yz as the mirror sees it.
    fn tilt_factor_yz(&self) -> f64;
}

/// Mirror that keeps the last pushed parameters in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMirror {
    params: BoxParams,
    pushes: u64,
}

impl InMemoryMirror {
    /// Empty mirror; every parameter reads as zero until the first push.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pushes received.
    #[must_use]
    pub const fn pushes(&self) -> u64 {
        self.pushes
    }

    /// Last pushed parameters.
    #[must_use]
    pub const fn params(&self) -> BoxParams {
        self.params
    }
}

impl BoxMirror for InMemoryMirror {
    fn push(&mut self, params: &BoxParams) {
        self.params = *params;
        self.pushes += 1;
    }

    fn l(&self) -> [f64; 3] {
        self.params.lengths()
    }

    fn tilt_factor_xy(&self) -> f64 {
        self.params.xy
    }

    fn tilt_factor_xz(&self) -> f64 {
        self.params.xz
    }

    fn tilt_factor_yz(&self) -> f64 {
        self.params.yz
    }
}

/// A [`SimBox`] bound to a [`BoxMirror`].
///
/// Each mutator forwards to the box and pushes exactly once if it succeeds.
/// A rejected mutation pushes nothing, since the box did not change.
#[derive(Debug)]
pub struct MirroredBox<M> {
    sim_box: SimBox,
    mirror: M,
}

impl<M: BoxMirror> MirroredBox<M> {
    /// Binds `sim_box` to `mirror` and pushes the initial state.
    pub fn new(sim_box: SimBox, mut mirror: M) -> Self {
        mirror.push(&sim_box.params());
        Self { sim_box, mirror }
    }

    /// Read access to the authoritative box.
    #[must_use]
    pub const fn sim_box(&self) -> &SimBox {
        &self.sim_box
    }

    /// Read access to the mirror.
    #[must_use]
    pub const fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Splits into the box and the mirror.
    pub fn into_parts(self) -> (SimBox, M) {
        (self.sim_box, self.mirror)
    }

    /// Sets `Lx` and pushes.
    pub fn set_lx(&mut self, lx: f64) {
        self.sim_box.set_lx(lx);
        self.sync();
    }

    /// Sets `Ly` and pushes.
    pub fn set_ly(&mut self, ly: f64) {
        self.sim_box.set_ly(ly);
        self.sync();
    }

    /// Sets `Lz` and pushes.
    pub fn set_lz(&mut self, lz: f64) {
        self.sim_box.set_lz(lz);
        self.sync();
    }

    /// Sets `xy` and pushes.
    pub fn set_xy(&mut self, xy: f64) {
        self.sim_box.set_xy(xy);
        self.sync();
    }

    /// Sets `xz` and pushes.
    pub fn set_xz(&mut self, xz: f64) {
        self.sim_box.set_xz(xz);
        self.sync();
    }

    /// Sets `yz` and pushes.
    pub fn set_yz(&mut self, yz: f64) {
        self.sim_box.set_yz(yz);
        self.sync();
    }

    /// See [`SimBox::set_l`].
    pub fn set_l(&mut self, l: impl AxisTriple) -> Result<(), BoxError> {
        self.sim_box.set_l(l)?;
        self.sync();
        Ok(())
    }

    /// See [`SimBox::set_tilts`].
    pub fn set_tilts(&mut self, tilts: impl AxisTriple) -> Result<(), BoxError> {
        self.sim_box.set_tilts(tilts)?;
        self.sync();
        Ok(())
    }

    /// See [`SimBox::set_matrix`].
    pub fn set_matrix(&mut self, matrix: impl Into<Mat3>) -> Result<(), BoxError> {
        self.sim_box.set_matrix(matrix)?;
        self.sync();
        Ok(())
    }

    /// See [`SimBox::scale`].
    pub fn scale(&mut self, s: impl AxisTriple) -> Result<(), BoxError> {
        self.sim_box.scale(s)?;
        self.sync();
        Ok(())
    }

    /// See [`SimBox::set_volume`].
    pub fn set_volume(&mut self, v: f64) -> Result<(), BoxError> {
        self.sim_box.set_volume(v)?;
        self.sync();
        Ok(())
    }

    /// Sets periodicity flags. Nothing is pushed.
    pub fn set_periodic(&mut self, periodic: [bool; 3]) {
        self.sim_box.set_periodic(periodic);
    }

    /// Sets periodicity along one axis. Nothing is pushed.
    pub fn set_periodic_axis(&mut self, axis: Axis, periodic: bool) {
        self.sim_box.set_periodic_axis(axis, periodic);
    }

    /// Reads the mirror back and checks it against the box, field by field.
    ///
    /// Fields match under the same rule as `SimBox` equality.
    pub fn verify(&self) -> Result<(), MirrorError> {
        let [lx, ly, lz] = self.mirror.l();
        let pulled = BoxParams {
            lx,
            ly,
            lz,
            xy: self.mirror.tilt_factor_xy(),
            xz: self.mirror.tilt_factor_xz(),
            yz: self.mirror.tilt_factor_yz(),
        };
        let ours = self.sim_box.params().named();
        for ((field, core), (_, mirror)) in ours.into_iter().zip(pulled.named()) {
            if !same_value(core, mirror) {
                warn!(field, core, mirror, "box mirror out of sync");
                return Err(MirrorError::Mismatch {
                    field,
                    core,
                    mirror,
                });
            }
        }
        Ok(())
    }

    fn sync(&mut self) {
        self.mirror.push(&self.sim_box.params());
    }
}
