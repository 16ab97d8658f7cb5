// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]
#![doc = r"Periodic simulation box geometry.

This crate provides:
- The box itself (`SimBox`): three edge lengths, three tilt factors and
  per-axis periodicity.
- Conversion to and from the upper-triangular box matrix (`codec`).
- Shape-preserving resizes (`SimBox::scale`, `SimBox::set_volume`).
- A typed construction config (`BoxConfig`).
- A push/verify port for engines that keep their own copy (`BoxMirror`).

Design notes:
- The six reduced parameters are the only stored geometry; the matrix and the
  lattice vectors are derived on demand.
- Fallible operations validate before mutating, so an error leaves the box
  unchanged.
- Logging goes through `tracing`; no subscriber is installed here.
"]

/// Reduced parameters to box matrix and back.
pub mod codec;
/// Typed construction config.
pub mod config;
/// Error types.
pub mod error;
/// Native mirror synchronization.
pub mod mirror;
mod scale;
/// Foundational box types.
pub mod types;

pub use config::BoxConfig;
pub use error::{BoxError, MirrorError};
pub use mirror::{BoxMirror, InMemoryMirror, MirroredBox};
pub use types::{Axis, AxisTriple, BoxParams, Mat3, SimBox};
