// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::base_box;
use simbox_geom::{
    Axis, BoxMirror, BoxParams, InMemoryMirror, MirrorError, MirroredBox, SimBox,
};

/// Engine copy that stores lengths and tilts separately, like a native box
/// object would, and can be told to drop a push.
#[derive(Default)]
struct NativeBox {
    l: [f64; 3],
    tilts: [f64; 3],
    frozen: bool,
}

impl BoxMirror for NativeBox {
    fn push(&mut self, params: &BoxParams) {
        if !self.frozen {
            self.l = params.lengths();
            self.tilts = params.tilts();
        }
    }

    fn l(&self) -> [f64; 3] {
        self.l
    }

    fn tilt_factor_xy(&self) -> f64 {
        self.tilts[0]
    }

    fn tilt_factor_xz(&self) -> f64 {
        self.tilts[1]
    }

    fn tilt_factor_yz(&self) -> f64 {
        self.tilts[2]
    }
}

#[test]
fn mirror_matches_box_after_construction() {
    let mb = MirroredBox::new(base_box(), NativeBox::default());
    let b = mb.sim_box();
    let m = mb.mirror();
    assert_eq!(m.l(), [b.lx(), b.ly(), b.lz()]);
    assert_eq!(m.tilt_factor_xy(), b.xy());
    assert_eq!(m.tilt_factor_xz(), b.xz());
    assert_eq!(m.tilt_factor_yz(), b.yz());
    assert_eq!(mb.verify(), Ok(()));
}

#[test]
fn every_successful_mutation_pushes_once() {
    let mut mb = MirroredBox::new(base_box(), InMemoryMirror::new());
    mb.set_lx(5.0);
    mb.set_ly(6.0);
    mb.set_lz(7.0);
    mb.set_xy(0.1);
    mb.set_xz(0.2);
    mb.set_yz(0.3);
    assert_eq!(mb.mirror().pushes(), 7);
    mb.set_l([1.0, 2.0, 3.0]).expect("triple");
    mb.set_tilts(0.0).expect("scalar");
    mb.set_matrix([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]])
        .expect("diagonal");
    mb.scale(2.0).expect("positive");
    mb.set_volume(27.0).expect("positive");
    assert_eq!(mb.mirror().pushes(), 12);
    assert_eq!(mb.mirror().params(), mb.sim_box().params());
    assert_eq!(mb.verify(), Ok(()));
}

#[test]
fn periodicity_changes_stay_on_the_box() {
    let mut mb = MirroredBox::new(base_box(), InMemoryMirror::new());
    mb.set_periodic([true, false, true]);
    mb.set_periodic_axis(Axis::Z, false);
    assert_eq!(mb.mirror().pushes(), 1);
    assert_eq!(mb.sim_box().periodic(), [true, false, false]);
    assert_eq!(mb.verify(), Ok(()));
}

#[test]
fn nan_tilt_reads_back_as_in_sync() {
    let mut mb = MirroredBox::new(base_box(), NativeBox::default());
    mb.set_xz(f64::NAN);
    assert_eq!(mb.verify(), Ok(()));
    let snapshot = *mb.sim_box();
    assert_eq!(mb.sim_box(), &snapshot);
}

#[test]
fn rejected_mutations_do_not_push() {
    let mut mb = MirroredBox::new(SimBox::cube(2.0), InMemoryMirror::new());
    assert!(mb.set_l(vec![1.0]).is_err());
    assert!(mb.set_tilts(vec![1.0, 2.0]).is_err());
    assert!(mb
        .set_matrix([[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
        .is_err());
    assert!(mb.scale(-2.0).is_err());
    assert!(mb.set_volume(f64::INFINITY).is_err());
    assert_eq!(mb.mirror().pushes(), 1);
    assert_eq!(mb.sim_box(), &SimBox::cube(2.0));
}

#[test]
fn verify_reports_first_stale_field() {
    let mut mb = MirroredBox::new(base_box(), NativeBox::default());
    let (b, mut native) = mb.into_parts();
    native.frozen = true;
    mb = MirroredBox::new(b, native);
    mb.set_ly(10.0);
    assert_eq!(
        mb.verify(),
        Err(MirrorError::Mismatch {
            field: "Ly",
            core: 10.0,
            mirror: 2.0
        })
    );
}
