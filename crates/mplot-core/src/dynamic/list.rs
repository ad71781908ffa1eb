use crate::dynamic::value::{Object, Value};

/// Build a runtime list from host values.
///
/// Each element goes through `Into<Object>`, so numbers, strings, arrays and
/// existing handles can be mixed freely. Element order is preserved.
pub fn list<I>(items: I) -> Object
where
    I: IntoIterator,
    I::Item: Into<Object>,
{
    Object::new(Value::List(items.into_iter().map(Into::into).collect()))
}

/// Build a runtime tuple from host values.
pub fn tuple<I>(items: I) -> Object
where
    I: IntoIterator,
    I::Item: Into<Object>,
{
    Object::new(Value::Tuple(items.into_iter().map(Into::into).collect()))
}

/// Heterogeneous form of [`list`]: `list![5, 2.7, "label"]`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::dynamic::list(::std::iter::empty::<$crate::dynamic::Object>())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::dynamic::list([$($crate::dynamic::Object::from($item)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{repr, str};

    #[test]
    fn test_list_macro_mixes_types() {
        let figsize = crate::list![5, 2.7];
        assert_eq!(str(&figsize), "[5, 2.7]");

        let mixed = crate::list!["linear", true, Object::none()];
        assert_eq!(repr(&mixed), "['linear', True, None]");
    }

    #[test]
    fn test_empty_list_macro() {
        let empty = crate::list![];
        assert_eq!(str(&empty), "[]");
    }

    #[test]
    fn test_single_element_tuple_keeps_comma() {
        assert_eq!(str(&tuple([1i64])), "(1,)");
    }
}
