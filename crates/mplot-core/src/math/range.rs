use std::ops::Add;

use ndarray::Array1;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::RangeError;

/// Element types `arange` can generate.
///
/// Integers and floats differ only in how the element count is derived from
/// the bounds, so that is the one thing implementors provide.
pub trait RangeElement: Copy + PartialOrd + Zero + One + Add<Output = Self> {
    /// Number of elements for a range already known to run in the direction
    /// of `step`. `None` when the count does not fit in `usize`.
    fn element_count(start: Self, stop: Self, step: Self) -> Option<usize>;
}

macro_rules! impl_integer_range {
    ($($t:ty),*) => {
        $(
            impl RangeElement for $t {
                fn element_count(start: Self, stop: Self, step: Self) -> Option<usize> {
                    // Widened so `stop - start` cannot overflow for any 64-bit input.
                    let span = stop as i128 - start as i128;
                    (span / step as i128).to_usize()
                }
            }
        )*
    };
}

macro_rules! impl_float_range {
    ($($t:ty),*) => {
        $(
            impl RangeElement for $t {
                fn element_count(start: Self, stop: Self, step: Self) -> Option<usize> {
                    let quotient = (stop - start) / step - 10.0 * <$t>::EPSILON;
                    quotient.to_usize()?.checked_add(1)
                }
            }
        )*
    };
}

impl_integer_range!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_range!(f32, f64);

/// Return evenly spaced values within `[start, stop)`.
///
/// Mirrors `numpy.arange`. For integer types `stop` is never included. For
/// floating point types the count is `trunc((stop - start) / step - 10 eps) + 1`,
/// which keeps a `stop` sitting on (or a rounding error past) a grid point
/// out of the result.
///
/// Elements are produced by repeatedly adding `step` to `start`, so float
/// results match an accumulating loop rather than `start + i * step`.
///
/// A range whose direction disagrees with the sign of `step` is empty.
///
/// # Errors
///
/// * [`RangeError::InvalidStep`] if `step` is zero.
/// * [`RangeError::UnboundedRange`] if the bounds are infinite or the
///   elements cannot be allocated.
pub fn arange<T: RangeElement>(start: T, stop: T, step: T) -> Result<Array1<T>, RangeError> {
    if step == T::zero() {
        return Err(RangeError::InvalidStep);
    }

    let ascending = stop > start && step > T::zero();
    let descending = stop < start && step < T::zero();
    let count = if ascending || descending {
        T::element_count(start, stop, step).ok_or(RangeError::UnboundedRange)?
    } else {
        0
    };
    log::trace!("arange: generating {} elements", count);

    let mut values: Vec<T> = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|_| RangeError::UnboundedRange)?;
    let mut x = start;
    for i in 0..count {
        values.push(x);
        if i + 1 < count {
            x = x + step;
        }
    }

    Ok(Array1::from_vec(values))
}

/// [`arange`] with a step of one.
pub fn arange_unit<T: RangeElement>(start: T, stop: T) -> Result<Array1<T>, RangeError> {
    arange(start, stop, T::one())
}
