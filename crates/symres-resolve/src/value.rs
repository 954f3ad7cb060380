//! Runtime value representation and the type tag classifier.
//!
//! [`Value`] is the dynamic runtime counterpart to symres-core's tag-based
//! signatures. A call site carries `Value`s; [`Value::tag`] classifies each
//! one into the [`TypeTag`] used for exact signature matching, and the host
//! executes the chosen implementation with the original, untagged values.

use serde::{Deserialize, Serialize};
use symres_core::tag::TypeTag;

/// A runtime argument or result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Unit,
}

impl Value {
    /// Classifies this value into its type tag.
    ///
    /// Fixed precedence: boolean-valued values classify as `bool` before the
    /// integral check (the `Bool` arm is matched first, so hosts that
    /// represent booleans integrally still get `bool`), whole numbers as
    /// `int`, text as `string`, ordered sequences as `array`, and anything
    /// else as its concrete runtime type name. Pure and total -- there is no
    /// failure mode.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Str(_) => TypeTag::Str,
            Value::Array(_) => TypeTag::Array,
            Value::Float(_) => TypeTag::other("float"),
            Value::Unit => TypeTag::other("unit"),
        }
    }

    /// Convenience constructor for string values.
    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_precedence() {
        assert_eq!(Value::Bool(true).tag(), TypeTag::Bool);
        assert_eq!(Value::Bool(false).tag(), TypeTag::Bool);
        assert_eq!(Value::Int(123).tag(), TypeTag::Int);
        assert_eq!(Value::Int(0).tag(), TypeTag::Int);
        assert_eq!(Value::str("abc").tag(), TypeTag::Str);
        assert_eq!(Value::Array(vec![]).tag(), TypeTag::Array);
    }

    #[test]
    fn fallback_tags_use_runtime_type_names() {
        assert_eq!(Value::Float(1.5).tag(), TypeTag::other("float"));
        assert_eq!(Value::Unit.tag(), TypeTag::other("unit"));
    }

    #[test]
    fn nested_arrays_are_still_arrays() {
        let v = Value::Array(vec![Value::Int(1), Value::Array(vec![Value::Bool(true)])]);
        assert_eq!(v.tag(), TypeTag::Array);
    }

    #[test]
    fn serde_roundtrip() {
        let v = Value::Array(vec![Value::Int(1), Value::str("x"), Value::Unit]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
