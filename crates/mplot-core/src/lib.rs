//! mplot-core: numeric and dynamic-value helpers for feeding a plotting runtime.
//!
//! This crate provides `numpy`-style range and grid generation on top of
//! `ndarray`, a small capability trait for opaque dynamically typed sequences
//! with fixed-arity unpacking, and list/string helpers for the built-in
//! dynamic value model.
//!
//! The Python bridge (`python` feature) is opt-in so the default build does not
//! need a Python interpreter or numpy headers.
pub mod dynamic;
pub mod error;
pub mod math;

#[cfg(feature = "python")]
pub mod python;

pub use dynamic::{list, repr, str, tuple, unpack, DynamicObject, Object, Value};
pub use error::{DynamicError, RangeError};
pub use math::{arange, arange_unit, meshgrid, RangeElement};
