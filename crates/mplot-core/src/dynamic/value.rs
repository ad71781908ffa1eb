use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayD, ArrayViewD, Axis};

use crate::dynamic::DynamicObject;
use crate::error::DynamicError;

/// A value of the built-in dynamic runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Object>),
    Tuple(Vec<Object>),
    /// n-dimensional float array; indexing walks the first axis.
    Array(ArrayD<f64>),
}

impl Value {
    /// Runtime type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Array(_) => "ndarray",
        }
    }

    fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) | Value::Tuple(items) => Some(items.len()),
            Value::Array(arr) if arr.ndim() > 0 => Some(arr.len_of(Axis(0))),
            _ => None,
        }
    }

    fn get(&self, index: usize) -> Result<Object, DynamicError> {
        let out_of_range = |len: usize| {
            DynamicError::Runtime(format!(
                "{} index {} out of range for length {}",
                self.type_name(),
                index,
                len
            ))
        };

        match self {
            Value::Str(s) => s
                .chars()
                .nth(index)
                .map(|c| Object::new(Value::Str(c.to_string())))
                .ok_or_else(|| out_of_range(s.chars().count())),
            Value::List(items) | Value::Tuple(items) => items
                .get(index)
                .cloned()
                .ok_or_else(|| out_of_range(items.len())),
            Value::Array(arr) if arr.ndim() > 0 => {
                let len = arr.len_of(Axis(0));
                if index >= len {
                    return Err(out_of_range(len));
                }
                let sub = arr.index_axis(Axis(0), index);
                if sub.ndim() == 0 {
                    let scalar = sub.iter().next().copied().unwrap_or(f64::NAN);
                    Ok(Object::new(Value::Float(scalar)))
                } else {
                    Ok(Object::new(Value::Array(sub.to_owned())))
                }
            }
            other => Err(DynamicError::Runtime(format!(
                "'{}' object is not subscriptable",
                other.type_name()
            ))),
        }
    }

    fn write(&self, f: &mut fmt::Formatter, quoted: bool) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", format_float(*v)),
            Value::Str(s) if quoted => write!(f, "{}", quote(s)),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Array(arr) if quoted => {
                let mut out = String::new();
                render_array(arr.view(), ", ", &mut out);
                write!(f, "array({})", out)
            }
            Value::Array(arr) => {
                let mut out = String::new();
                render_array(arr.view(), " ", &mut out);
                write!(f, "{}", out)
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter, items: &[Object]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        item.0.write(f, true)?;
    }
    Ok(())
}

/// Floats keep a decimal point when integral, matching the runtime's `repr`.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

fn quote(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        return format!("\"{}\"", s.replace('\\', "\\\\"));
    }
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn render_array(view: ArrayViewD<f64>, sep: &str, out: &mut String) {
    if view.ndim() == 0 {
        if let Some(v) = view.iter().next() {
            out.push_str(&format_float(*v));
        }
        return;
    }
    out.push('[');
    for (idx, sub) in view.outer_iter().enumerate() {
        if idx > 0 {
            out.push_str(sep);
        }
        render_array(sub, sep, out);
    }
    out.push(']');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

/// Reference-counted handle to a [`Value`].
///
/// Cloning a handle shares the value; equality compares values, use
/// [`Object::ptr_eq`] for identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Object(Arc<Value>);

impl Object {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    pub fn none() -> Self {
        Self::new(Value::None)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// `true` if both handles refer to the same runtime value.
    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, false)
    }
}

impl DynamicObject for Value {
    type Handle = Object;

    fn sequence_len(&self) -> Option<usize> {
        self.len()
    }

    fn item(&self, index: usize) -> Result<Object, DynamicError> {
        self.get(index)
    }

    fn render_str(&self) -> String {
        self.to_string()
    }

    fn render_repr(&self) -> String {
        struct Repr<'a>(&'a Value);
        impl fmt::Display for Repr<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.write(f, true)
            }
        }
        Repr(self).to_string()
    }
}

impl DynamicObject for Object {
    type Handle = Object;

    fn sequence_len(&self) -> Option<usize> {
        self.0.sequence_len()
    }

    fn item(&self, index: usize) -> Result<Object, DynamicError> {
        self.0.item(index)
    }

    fn render_str(&self) -> String {
        self.0.render_str()
    }

    fn render_repr(&self) -> String {
        self.0.render_repr()
    }
}

impl From<Value> for Object {
    fn from(value: Value) -> Self {
        Object::new(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::new(Value::Bool(value))
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::new(Value::Int(value))
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::new(Value::Int(value.into()))
    }
}

impl From<usize> for Object {
    fn from(value: usize) -> Self {
        // Saturates: the runtime's int is 64-bit signed.
        Object::new(Value::Int(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::new(Value::Float(value))
    }
}

impl From<f32> for Object {
    fn from(value: f32) -> Self {
        Object::new(Value::Float(value.into()))
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::new(Value::Str(value.to_string()))
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::new(Value::Str(value))
    }
}

impl From<Array1<f64>> for Object {
    fn from(value: Array1<f64>) -> Self {
        Object::new(Value::Array(value.into_dyn()))
    }
}

impl From<Array2<f64>> for Object {
    fn from(value: Array2<f64>) -> Self {
        Object::new(Value::Array(value.into_dyn()))
    }
}

impl From<ArrayD<f64>> for Object {
    fn from(value: ArrayD<f64>) -> Self {
        Object::new(Value::Array(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_float_rendering_keeps_decimal_point() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_quote_prefers_double_quotes_around_apostrophe() {
        assert_eq!(quote("ax"), "'ax'");
        assert_eq!(quote("it's"), "\"it's\"");
    }

    #[test]
    fn test_array_indexing_walks_first_axis() {
        let grid = Value::Array(array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
        let row = grid.item(1).unwrap();
        assert_eq!(row.value(), &Value::Array(array![3.0, 4.0].into_dyn()));
        assert_eq!(row.item(0).unwrap().value(), &Value::Float(3.0));
    }

    #[test]
    fn test_scalar_is_not_subscriptable() {
        let err = Value::Int(3).item(0).unwrap_err();
        assert_eq!(
            err,
            DynamicError::Runtime("'int' object is not subscriptable".to_string())
        );
    }

    #[test]
    fn test_usize_above_int_range_saturates() {
        assert_eq!(Object::from(usize::MAX).value(), &Value::Int(i64::MAX));
        assert_eq!(Object::from(7usize).value(), &Value::Int(7));
    }
}
