//! `numpy`-style coordinate generators returning `ndarray` containers.
//!
//! `arange` builds evenly spaced 1-D sequences and `meshgrid` broadcasts two
//! such sequences into a pair of 2-D coordinate arrays.
pub mod grid;
pub mod range;

pub use grid::meshgrid;
pub use range::{arange, arange_unit, RangeElement};
