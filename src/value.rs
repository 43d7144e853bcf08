// this_file: src/value.rs

//! Dynamic values crossing the host-runtime boundary.

use crate::types::Vector2f;

/// A value returned by a host-runtime method.
///
/// The host side is dynamically typed, so every return value arrives as a
/// `Value` and the calling bridge validates the shape it needs. `Tuple`
/// exists because scripting runtimes commonly hand back a bare coordinate
/// pair where the native side expects a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Vec2(Vector2f),
    Tuple(Vec<Value>),
}

impl Value {
    /// Short type name used in type-mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Vec2(_) => "vec2",
            Value::Tuple(_) => "tuple",
        }
    }

    /// The value as a signed 64-bit integer, if it is one.
    ///
    /// Only `Int` qualifies; a `Float` is a type mismatch at this boundary,
    /// never an implicit conversion.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Int(v) => Some(*v as f32),
            Value::Float(v) => Some(*v as f32),
            _ => None,
        }
    }
}

/// Convert a host value into a native 2D float vector.
///
/// Accepts a `Vec2` directly or a two-element numeric tuple. Returns `None`
/// for anything else; the caller decides how to report the mismatch.
pub fn to_vector2f(value: &Value) -> Option<Vector2f> {
    match value {
        Value::Vec2(v) => Some(*v),
        Value::Tuple(items) => match items.as_slice() {
            [x, y] => Some(Vector2f::new(x.as_f32()?, y.as_f32()?)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_int_is_strict() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(42.0).as_int(), None);
        assert_eq!(Value::Str("42".to_owned()).as_int(), None);
    }

    #[test]
    fn test_to_vector2f() {
        let v = to_vector2f(&Value::Vec2(Vector2f::new(1.5, -2.0))).unwrap();
        assert_eq!(v, Vector2f::new(1.5, -2.0));

        let v = to_vector2f(&Value::Tuple(vec![Value::Int(400), Value::Float(200.5)])).unwrap();
        assert_eq!(v, Vector2f::new(400.0, 200.5));

        assert!(to_vector2f(&Value::Tuple(vec![Value::Int(1)])).is_none());
        assert!(to_vector2f(&Value::Tuple(vec![
            Value::Str("x".to_owned()),
            Value::Int(2)
        ]))
        .is_none());
        assert!(to_vector2f(&Value::None).is_none());
    }
}
