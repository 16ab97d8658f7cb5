// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core box types: the box itself, its reduced parameters, the matrix value
//! type and per-axis argument helpers.
//!
//! Numeric notes:
//! - All values are `f64` and compared exactly; no tolerance is applied by
//!   equality or by the codec.
//! - `-0.0` is treated as zero wherever a zero test matters (2-D detection,
//!   triangularity, tilt recovery).

mod mat3;
mod params;
mod sim_box;
mod triple;

pub use mat3::Mat3;
pub(crate) use params::same_value;
pub use params::BoxParams;
pub use sim_box::SimBox;
pub use triple::{Axis, AxisTriple};
