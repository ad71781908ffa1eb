//! Integration tests for `meshgrid`.

use mplot_core::math::{arange, meshgrid};
use ndarray::{array, Array1};

#[test]
fn rows_copy_x_and_columns_copy_y() {
    let x = array![1, 2, 3];
    let y = array![10, 20];
    let (xx, yy) = meshgrid(&x, &y);
    assert_eq!(xx, array![[1, 2, 3], [1, 2, 3]]);
    assert_eq!(yy, array![[10, 10, 10], [20, 20, 20]]);
}

#[test]
fn empty_x_gives_zero_columns() {
    let x: Array1<i32> = Array1::from_vec(vec![]);
    let y = array![1, 2];
    let (xx, yy) = meshgrid(&x, &y);
    assert_eq!(xx.dim(), (2, 0));
    assert_eq!(yy.dim(), (2, 0));
}

#[test]
fn empty_y_gives_zero_rows() {
    let x = array![1.0, 2.0];
    let y: Array1<f64> = Array1::from_vec(vec![]);
    let (xx, yy) = meshgrid(&x, &y);
    assert_eq!(xx.dim(), (0, 2));
    assert_eq!(yy.dim(), (0, 2));
}

#[test]
fn grid_from_ranges() {
    let x = arange(-1.0, 1.01, 1.0).unwrap();
    let y = arange(-2.0, 2.01, 1.0).unwrap();
    let (xx, yy) = meshgrid(&x, &y);

    assert_eq!(xx.dim(), (5, 3));
    for row in xx.rows() {
        assert_eq!(row, x);
    }
    for col in yy.columns() {
        assert_eq!(col, y);
    }
}

#[test]
fn outputs_do_not_alias() {
    let x = array![1.0, 2.0];
    let y = array![3.0, 4.0];
    let (mut xx, yy) = meshgrid(&x, &y);
    xx[(0, 0)] = 99.0;
    assert_eq!(yy[(0, 0)], 3.0);
    assert_eq!(x[0], 1.0);
}

#[test]
fn repeated_calls_are_identical() {
    let x = array![0.5, 1.5, 2.5];
    let y = array![-1.0];
    assert_eq!(meshgrid(&x, &y), meshgrid(&x, &y));
}
