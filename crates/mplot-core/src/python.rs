//! Bridge to an embedded Python interpreter and numpy.
//!
//! Only one interpreter exists per process; every entry point here goes
//! through [`with_interpreter`], which initialises it on first use and runs
//! the closure with the GIL held.
use ndarray::{Array1, Array2};
use numpy::{Element, PyArray1, PyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::dynamic::{unpack, DynamicObject};
use crate::error::DynamicError;

impl From<DynamicError> for PyErr {
    fn from(err: DynamicError) -> Self {
        match err {
            DynamicError::LengthMismatch { .. } => PyValueError::new_err(err.to_string()),
            DynamicError::Runtime(msg) => PyRuntimeError::new_err(msg),
        }
    }
}

impl<'py> DynamicObject for Bound<'py, PyAny> {
    type Handle = Py<PyAny>;

    fn sequence_len(&self) -> Option<usize> {
        match self.hasattr("__getitem__") {
            Ok(true) => self.len().ok(),
            _ => None,
        }
    }

    fn item(&self, index: usize) -> Result<Py<PyAny>, DynamicError> {
        self.get_item(index)
            .map(Bound::unbind)
            .map_err(|e| DynamicError::Runtime(e.to_string()))
    }

    fn render_str(&self) -> String {
        self.str()
            .map(|s| s.to_string())
            .unwrap_or_else(|e| format!("<unprintable object: {}>", e))
    }

    fn render_repr(&self) -> String {
        self.repr()
            .map(|s| s.to_string())
            .unwrap_or_else(|e| format!("<unprintable object: {}>", e))
    }
}

/// Run `f` against the process-wide interpreter, initialising it if needed.
pub fn with_interpreter<F, R>(f: F) -> R
where
    F: for<'py> FnOnce(Python<'py>) -> R,
{
    pyo3::prepare_freethreaded_python();
    Python::with_gil(f)
}

/// [`unpack`] with the error raised as a Python exception.
pub fn unpack_py<const N: usize>(obj: &Bound<'_, PyAny>) -> PyResult<[Py<PyAny>; N]> {
    Ok(unpack::<N, _>(obj)?)
}

/// Hand a coordinate sequence to Python as a numpy array.
pub fn to_numpy<'py, T: Element>(py: Python<'py>, values: &Array1<T>) -> Bound<'py, PyArray1<T>> {
    PyArray1::from_array_bound(py, values)
}

/// Hand a `meshgrid` result to Python as a pair of numpy arrays.
pub fn grid_to_numpy<'py, T: Element>(
    py: Python<'py>,
    grid: &(Array2<T>, Array2<T>),
) -> (Bound<'py, PyArray2<T>>, Bound<'py, PyArray2<T>>) {
    (
        PyArray2::from_array_bound(py, &grid.0),
        PyArray2::from_array_bound(py, &grid.1),
    )
}

/// Build a Python list from host values.
pub fn py_list<'py, T, I>(py: Python<'py>, items: I) -> Bound<'py, PyList>
where
    T: ToPyObject,
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    PyList::new_bound(py, items)
}

