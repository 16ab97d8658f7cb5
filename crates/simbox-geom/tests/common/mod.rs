// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use simbox_geom::SimBox;

pub const EPS: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

pub fn assert_approx3(a: [f64; 3], b: [f64; 3]) {
    for i in 0..3 {
        assert!(approx_eq(a[i], b[i]), "index {i}: {a:?} vs {b:?}");
    }
}

pub fn assert_approx33(a: [[f64; 3]; 3], b: [[f64; 3]; 3]) {
    for i in 0..3 {
        assert_approx3(a[i], b[i]);
    }
}

pub fn aspect(l: [f64; 3]) -> [f64; 3] {
    [l[0] / l[1], l[0] / l[2], l[1] / l[2]]
}

/// Lx=1, Ly=2, Lz=3, xy=1, xz=2, yz=3.
pub fn base_box() -> SimBox {
    SimBox::with_tilts(1.0, 2.0, 3.0, 1.0, 2.0, 3.0)
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
