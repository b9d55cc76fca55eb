//! Raw point value representation
//!
//! Values crossing the device boundary are loosely typed: a controller may
//! report a float for an analog object, a state text for a binary object, or
//! an index for a multi-state object. `PointValue` carries all of them plus
//! the null sentinel used to vacate a priority slot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value read from or written to a device point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointValue {
    /// Boolean value (for digital points)
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Null/undefined value, also the "vacate this slot" sentinel
    Null,
}

impl PointValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PointValue::Bool(v) => Some(*v),
            PointValue::Int(v) => Some(*v != 0),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PointValue::Float(v) => Some(*v),
            PointValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PointValue::Int(v) => Some(*v),
            PointValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            PointValue::String(v) => Some(v.clone()),
            PointValue::Bool(v) => Some(v.to_string()),
            PointValue::Int(v) => Some(v.to_string()),
            PointValue::Float(v) => Some(v.to_string()),
            PointValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PointValue::Null)
    }
}

/// Command-text rendering of a value.
///
/// Integers and floats are formatted with `itoa`/`ryu` stack buffers; `ryu`
/// keeps the fractional part, so `5.0` renders as `"5.0"`, not `"5"`. Null
/// renders as the literal `null` the priority array understands.
impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointValue::Bool(v) => f.write_str(if *v { "true" } else { "false" }),
            PointValue::Int(v) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            PointValue::Float(v) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            PointValue::String(v) => f.write_str(v),
            PointValue::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for PointValue {
    fn from(v: bool) -> Self {
        PointValue::Bool(v)
    }
}

impl From<i64> for PointValue {
    fn from(v: i64) -> Self {
        PointValue::Int(v)
    }
}

impl From<i32> for PointValue {
    fn from(v: i32) -> Self {
        PointValue::Int(v as i64)
    }
}

impl From<f64> for PointValue {
    fn from(v: f64) -> Self {
        PointValue::Float(v)
    }
}

impl From<&str> for PointValue {
    fn from(v: &str) -> Self {
        PointValue::String(v.to_string())
    }
}

impl From<String> for PointValue {
    fn from(v: String) -> Self {
        PointValue::String(v)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_fractional_part() {
        assert_eq!(PointValue::Float(5.0).to_string(), "5.0");
        assert_eq!(PointValue::Float(21.5).to_string(), "21.5");
        assert_eq!(PointValue::Float(-123.456).to_string(), "-123.456");
    }

    #[test]
    fn test_display_other_variants() {
        assert_eq!(PointValue::Int(3).to_string(), "3");
        assert_eq!(PointValue::Int(-42).to_string(), "-42");
        assert_eq!(PointValue::Bool(true).to_string(), "true");
        assert_eq!(PointValue::Bool(false).to_string(), "false");
        assert_eq!(PointValue::String("active".to_string()).to_string(), "active");
        assert_eq!(PointValue::Null.to_string(), "null");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(PointValue::Float(21.5).as_f64(), Some(21.5));
        assert_eq!(PointValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(PointValue::String("x".to_string()).as_f64(), None);
        assert_eq!(PointValue::Null.as_f64(), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(PointValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PointValue::Int(0).as_bool(), Some(false));
        assert_eq!(PointValue::Int(1).as_bool(), Some(true));
        assert_eq!(PointValue::Float(1.0).as_bool(), None);
    }

    #[test]
    fn test_untagged_serde() {
        let v: PointValue = serde_json::from_str("21.5").unwrap();
        assert_eq!(v, PointValue::Float(21.5));

        let v: PointValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, PointValue::Int(3));

        let v: PointValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, PointValue::Bool(true));

        let v: PointValue = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(v, PointValue::String("active".to_string()));

        let v: PointValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, PointValue::Null);

        assert_eq!(serde_json::to_string(&PointValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(PointValue::from(true), PointValue::Bool(true));
        assert_eq!(PointValue::from(3i64), PointValue::Int(3));
        assert_eq!(PointValue::from(2i32), PointValue::Int(2));
        assert_eq!(PointValue::from(1.5), PointValue::Float(1.5));
        assert_eq!(PointValue::from("on"), PointValue::String("on".to_string()));
    }
}
