use std::error::Error;
use std::fmt;

/// Failures raised while computing an evenly spaced range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The step between elements is zero.
    InvalidStep,
    /// The bounds do not describe a finite, addressable number of elements.
    UnboundedRange,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeError::InvalidStep => write!(f, "step is zero in arange()"),
            RangeError::UnboundedRange => {
                write!(f, "arange() bounds are infinite or give too many elements")
            }
        }
    }
}

impl Error for RangeError {}

/// Failures raised while reading an opaque dynamic value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicError {
    /// The value is not indexable or its length differs from the requested arity.
    LengthMismatch { expected: usize, actual: String },
    /// The runtime rejected an indexing request.
    Runtime(String),
}

impl fmt::Display for DynamicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DynamicError::LengthMismatch { expected, actual } => write!(
                f,
                "Expected sequence of length {} but have {}",
                expected, actual
            ),
            DynamicError::Runtime(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for DynamicError {}
