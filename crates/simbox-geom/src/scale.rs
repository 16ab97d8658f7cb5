// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape-preserving resize operations.
//!
//! Scaling multiplies edge lengths and never touches tilt factors, so the
//! shear of the box survives every resize.

use tracing::debug;

use crate::error::BoxError;
use crate::types::{AxisTriple, SimBox};

impl SimBox {
    /// Multiplies the edge lengths by `s`.
    ///
    /// A scalar scales every axis alike, keeping aspect ratios and multiplying
    /// the volume by `s³`. A triple scales per axis. Each factor must be finite
    /// and positive; otherwise the box is left unchanged.
    pub fn scale(&mut self, s: impl AxisTriple) -> Result<(), BoxError> {
        let factors = s.into_triple()?;
        if let Some(&value) = factors.iter().find(|f| !f.is_finite() || **f <= 0.0) {
            return Err(BoxError::InvalidScaleFactor { value });
        }
        let old = self.l();
        let mut params = self.params();
        params.lx *= factors[0];
        params.ly *= factors[1];
        params.lz *= factors[2];
        self.replace_params(params);
        debug!(?old, new = ?self.l(), ?factors, "box scaled");
        Ok(())
    }

    /// Rescales uniformly so that [`SimBox::volume`] becomes `v`.
    ///
    /// Aspect ratios and tilts are preserved. Fails if `v` is not a finite
    /// positive number or if the current volume is not positive (which
    /// includes every 2-D box).
    ///
    /// The factor is built from per-axis cube roots, so boxes whose volume
    /// product under- or overflows still rescale.
    pub fn set_volume(&mut self, v: f64) -> Result<(), BoxError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(BoxError::InvalidVolume { value: v });
        }
        let [lx, ly, lz] = self.l();
        let sign = lx.signum() * ly.signum() * lz.signum();
        if [lx, ly, lz].iter().any(|l| l.is_nan() || *l == 0.0) || sign < 0.0 {
            return Err(BoxError::DegenerateBox {
                volume: self.volume(),
            });
        }
        let k = v.cbrt() / lx.cbrt() / ly.cbrt() / lz.cbrt();
        debug!(old_volume = self.volume(), new_volume = v, factor = k, "box volume set");
        self.scale(k)
    }
}
