// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{assert_approx3, assert_approx33, base_box};
use simbox_geom::{codec, BoxError, Mat3, SimBox};

const NEW_MATRIX: [[f64; 3]; 3] = [[2.0, 4.0, 24.0], [0.0, 4.0, 40.0], [0.0, 0.0, 8.0]];

#[test]
fn matrix_of_reference_box() {
    assert_eq!(
        base_box().matrix().to_rows(),
        [[1.0, 2.0, 6.0], [0.0, 2.0, 9.0], [0.0, 0.0, 3.0]]
    );
}

#[test]
fn lattice_vectors_of_reference_box() {
    assert_approx33(
        base_box().lattice_vectors(),
        [[1.0, 0.0, 0.0], [2.0, 2.0, 0.0], [6.0, 9.0, 3.0]],
    );
    assert_approx33(
        SimBox::cube(4.0).lattice_vectors(),
        [[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
    );
}

#[test]
fn matrix_follows_parameter_changes() {
    let mut b = base_box();
    let m0 = b.matrix();
    b.set_xy(b.xy() * 2.0);
    assert_eq!(b.matrix().get(0, 1), m0.get(0, 1).map(|v| v * 2.0));
    b.set_yz(b.yz() * 0.5);
    assert_eq!(b.matrix().get(1, 2), m0.get(1, 2).map(|v| v * 0.5));
    b.set_lx(b.lx() * 3.0);
    assert_eq!(b.matrix().get(0, 0), m0.get(0, 0).map(|v| v * 3.0));
}

#[test]
fn set_matrix_recovers_parameters() {
    let mut b = base_box();
    b.set_matrix(NEW_MATRIX).expect("upper-triangular");
    assert_approx33(b.matrix().to_rows(), NEW_MATRIX);
    assert_approx3(b.l(), [2.0, 4.0, 8.0]);
    assert_approx3(b.tilts(), [1.0, 3.0, 5.0]);
}

#[test]
fn from_matrix_recovers_parameters() {
    let b = SimBox::from_matrix(NEW_MATRIX).expect("upper-triangular");
    assert_approx33(b.matrix().to_rows(), NEW_MATRIX);
    assert_approx3(b.l(), [2.0, 4.0, 8.0]);
    assert_approx3(b.tilts(), [1.0, 3.0, 5.0]);
    assert_eq!(b.periodic(), [true, true, true]);
}

#[test]
fn from_matrix_round_trips_reference_box() {
    let b = base_box();
    assert_eq!(SimBox::from_matrix(b.matrix()), Ok(b));
}

#[test]
fn non_triangular_matrix_is_rejected_without_mutation() {
    let mut b = base_box();
    let bad = [[1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.0, 0.0, 1.0]];
    assert_eq!(
        b.set_matrix(bad),
        Err(BoxError::InvalidMatrixShape {
            row: 1,
            col: 0,
            value: 0.5
        })
    );
    assert_eq!(b, base_box());
    assert!(SimBox::from_matrix(bad).is_err());
}

#[test]
fn two_dimensional_matrix_zeroes_z_tilts() {
    let m = [[3.0, 1.5, 9.0], [0.0, 3.0, 9.0], [0.0, 0.0, 0.0]];
    let b = SimBox::from_matrix(m).expect("upper-triangular");
    assert!(b.is_2d());
    assert_eq!(b.tilts(), [0.5, 0.0, 0.0]);
}

#[test]
fn zero_length_boxes_round_trip() {
    let flat = SimBox::with_tilts(2.0, 3.0, 0.0, 0.5, 0.0, 0.0);
    assert_eq!(SimBox::from_matrix(flat.matrix()), Ok(flat));

    let no_y = SimBox::with_tilts(2.0, 0.0, 4.0, 0.0, 0.25, 0.75);
    assert_eq!(SimBox::from_matrix(no_y.matrix()), Ok(no_y));

    // A tilt on a zero axis leaves no trace in the matrix.
    let lossy = SimBox::with_tilts(2.0, 0.0, 4.0, 1.0, 0.25, 0.75);
    let back = SimBox::from_matrix(lossy.matrix()).expect("upper-triangular");
    assert_eq!(back.xy(), 0.0);
    assert_eq!(back, no_y);
}

#[test]
fn dynamic_matrix_goes_through_try_from() {
    let rows = vec![
        vec![2.0, 4.0, 24.0],
        vec![0.0, 4.0, 40.0],
        vec![0.0, 0.0, 8.0],
    ];
    let m = Mat3::try_from(rows).expect("3x3");
    let p = codec::decode(&m).expect("upper-triangular");
    assert_eq!(codec::encode(&p), m);
    assert_eq!(codec::lattice_vectors(&p), m.transpose().to_rows());
}
