//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValueError;

/// A dynamic value held by one field of a record.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | fractional number | `Float` |
/// | string | `String` |
///
/// # Example
///
/// ```
/// use sortgrid::model::Value;
///
/// let name = Value::from("hoge");
/// let age = Value::from(12);
/// let empty = Value::Null;
/// assert_eq!(age.to_string(), "12");
/// assert_eq!(empty.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
}

/// The kind of a [`Value`], used to declare a column's expected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
}

impl ValueKind {
    /// Returns the type name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
        }
    }

    /// Returns `true` if a column declared as this kind may hold `actual`.
    ///
    /// Integral numbers are valid floats.
    pub fn accepts(self, actual: ValueKind) -> bool {
        self == actual || (self == ValueKind::Float && actual == ValueKind::Int)
    }

    /// Position of this kind when values of different kinds are compared.
    ///
    /// `Int` and `Float` share a rank so that numbers interleave.
    fn rank(self) -> u8 {
        match self {
            ValueKind::Null => 0,
            ValueKind::Bool => 1,
            ValueKind::Int | ValueKind::Float => 2,
            ValueKind::String => 3,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Compares two values by their natural ordering.
    ///
    /// Numbers compare numerically (integers and floats are mutually
    /// comparable), strings lexicographically and booleans with
    /// `false < true`. Values of different kinds order as
    /// `Null < Bool < number < String`.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => cmp_floats(*a, *b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (a, b) => a.kind().rank().cmp(&b.kind().rank()),
        }
    }

    /// Converts a JSON value into a field value.
    ///
    /// Arrays and objects have no cell representation and are rejected.
    pub fn from_json(field: &str, json: serde_json::Value) -> Result<Value, ValueError> {
        let unsupported = |kind| ValueError::Unsupported {
            field: field.to_string(),
            kind,
        };

        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(v) => Ok(Value::Bool(v)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Ok(Value::Int(v)),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| ValueError::NumberOutOfRange {
                        field: field.to_string(),
                    }),
            },
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(_) => Err(unsupported("array")),
            serde_json::Value::Object(_) => Err(unsupported("object")),
        }
    }
}

/// NaN sorts after every other number and equals itself.
fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer with a float, without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, exactly representable
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return Ordering::Less;
    }
    let floor = float.floor();
    if floor >= BOUND {
        return Ordering::Less;
    }
    if floor < -BOUND {
        return Ordering::Greater;
    }

    // In range, so the cast is exact
    match int.cmp(&(floor as i64)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

/// The raw value as display text. `Null` displays as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUND_F64: f64 = 9_223_372_036_854_775_808.0;

    #[test]
    fn test_natural_cmp_numbers() {
        assert_eq!(Value::from(12).natural_cmp(&Value::from(23)), Ordering::Less);
        assert_eq!(Value::from(2.5).natural_cmp(&Value::from(2)), Ordering::Greater);
        assert_eq!(Value::from(3).natural_cmp(&Value::from(3.0)), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_large_numbers_are_exact() {
        let two_53: i64 = 1 << 53;
        let big = Value::Int(two_53 + 1);
        let float = Value::Float(two_53 as f64);
        let int = Value::Int(two_53);

        assert_eq!(big.natural_cmp(&float), Ordering::Greater);
        assert_eq!(float.natural_cmp(&big), Ordering::Less);
        assert_eq!(int.natural_cmp(&float), Ordering::Equal);
        assert_eq!(big.natural_cmp(&int), Ordering::Greater);

        assert_eq!(Value::Int(i64::MAX).natural_cmp(&Value::Float(BOUND_F64)), Ordering::Less);
        assert_eq!(Value::Int(i64::MIN).natural_cmp(&Value::Float(-BOUND_F64)), Ordering::Equal);
        assert_eq!(Value::Int(-3).natural_cmp(&Value::Float(-2.5)), Ordering::Less);
        assert_eq!(Value::Int(-2).natural_cmp(&Value::Float(-2.5)), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp_non_finite_floats() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(Value::Int(i64::MAX).natural_cmp(&Value::Float(f64::INFINITY)), Ordering::Less);
        assert_eq!(Value::Int(i64::MIN).natural_cmp(&Value::Float(f64::NEG_INFINITY)), Ordering::Greater);
        assert_eq!(Value::Int(0).natural_cmp(&nan), Ordering::Less);
        assert_eq!(nan.natural_cmp(&Value::Float(f64::INFINITY)), Ordering::Greater);
        assert_eq!(nan.natural_cmp(&nan), Ordering::Equal);
    }

    #[test]
    fn test_float_kind_accepts_integers() {
        assert!(ValueKind::Float.accepts(ValueKind::Int));
        assert!(ValueKind::Int.accepts(ValueKind::Int));
        assert!(!ValueKind::Int.accepts(ValueKind::Float));
        assert!(!ValueKind::Float.accepts(ValueKind::String));
    }

    #[test]
    fn test_natural_cmp_strings_are_lexicographic() {
        assert_eq!(Value::from("fuga").natural_cmp(&Value::from("hoge")), Ordering::Less);
        assert_eq!(Value::from("10").natural_cmp(&Value::from("9")), Ordering::Less);
        assert_eq!(Value::from("a").natural_cmp(&Value::from("a")), Ordering::Equal);
    }

    #[test]
    fn test_natural_cmp_mixed_kinds() {
        assert_eq!(Value::Null.natural_cmp(&Value::from(false)), Ordering::Less);
        assert_eq!(Value::from(true).natural_cmp(&Value::from(0)), Ordering::Less);
        assert_eq!(Value::from(99).natural_cmp(&Value::from("1")), Ordering::Less);
        assert_eq!(Value::Null.natural_cmp(&Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("hoge").to_string(), "hoge");
        assert_eq!(Value::from(12).to_string(), "12");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(
            Value::from_json("age", serde_json::json!(12)).unwrap(),
            Value::Int(12)
        );
        assert_eq!(
            Value::from_json("ratio", serde_json::json!(0.25)).unwrap(),
            Value::Float(0.25)
        );
        assert_eq!(
            Value::from_json("tags", serde_json::json!(["a"])),
            Err(ValueError::Unsupported {
                field: "tags".to_string(),
                kind: "array",
            })
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
