//! Opaque dynamically typed values and fixed-arity sequence unpacking.
//!
//! A plotting runtime hands back values whose shape is only known at run
//! time (`plt.subplots()` returns a figure and an array of axes, for
//! example). [`DynamicObject`] is the minimal read protocol such a value must
//! offer: a length query that doubles as the indexing capability check, and
//! indexed retrieval of element handles. [`unpack`] turns any such value into
//! a statically sized array of handles for positional destructuring.
//!
//! The built-in [`Value`] model implements the protocol in pure Rust; the
//! `python` feature implements it for live Python objects.
pub mod list;
pub mod value;

pub use list::{list, tuple};
pub use value::{Object, Value};

use crate::error::DynamicError;

/// Minimal read protocol of an opaque dynamic value.
pub trait DynamicObject {
    /// Shared handle to one element; lives independently of the source value.
    type Handle;

    /// Length of the value if it supports indexed access, `None` otherwise.
    fn sequence_len(&self) -> Option<usize>;

    /// Handle to the element at `index`.
    fn item(&self, index: usize) -> Result<Self::Handle, DynamicError>;

    /// Rendering equivalent to the runtime's `str(obj)`.
    fn render_str(&self) -> String;

    /// Rendering equivalent to the runtime's `repr(obj)`.
    fn render_repr(&self) -> String;
}

/// Unpack an indexable value of length `N` into `N` element handles.
///
/// Position `i` of the result is `obj[i]`, so the result can be destructured
/// directly:
///
/// ```
/// use mplot_core::dynamic::{tuple, unpack, Object};
///
/// let figure = Object::from("figure");
/// let axes = Object::from("axes");
/// let pair = tuple([figure.clone(), axes.clone()]);
///
/// let [fig, ax] = unpack::<2, _>(&pair).unwrap();
/// assert!(Object::ptr_eq(&fig, &figure));
/// assert!(Object::ptr_eq(&ax, &axes));
/// ```
///
/// # Errors
///
/// [`DynamicError::LengthMismatch`] if `obj` is not indexable or its length is
/// not `N`. The check runs before any element is read.
pub fn unpack<const N: usize, O>(obj: &O) -> Result<[O::Handle; N], DynamicError>
where
    O: DynamicObject + ?Sized,
{
    if obj.sequence_len() != Some(N) {
        return Err(DynamicError::LengthMismatch {
            expected: N,
            actual: obj.render_str(),
        });
    }
    log::trace!("unpack: extracting {} elements", N);

    let mut handles = Vec::with_capacity(N);
    for index in 0..N {
        handles.push(obj.item(index)?);
    }
    handles.try_into().map_err(|rest: Vec<O::Handle>| {
        DynamicError::Runtime(format!(
            "sequence yielded {} elements while unpacking {}",
            rest.len(),
            N
        ))
    })
}

/// `str(obj)` of the runtime.
pub fn str<O: DynamicObject + ?Sized>(obj: &O) -> String {
    obj.render_str()
}

/// `repr(obj)` of the runtime.
pub fn repr<O: DynamicObject + ?Sized>(obj: &O) -> String {
    obj.render_repr()
}
