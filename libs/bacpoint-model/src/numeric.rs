//! Numeric (analog) point
//!
//! Raw values are real numbers. Writes accept floats, integers and numeric
//! strings; everything is coerced to a float before it goes on the wire.

use std::fmt;

use bacpoint_link::PointValue;

use crate::error::{PointError, Result};
use crate::point::{Point, PointCore};

/// Analog point carrying an engineering unit label
pub struct NumericPoint {
    core: PointCore,
}

impl NumericPoint {
    pub fn new(core: PointCore) -> Self {
        Self { core }
    }
}

fn coerce_numeric(value: &PointValue) -> Result<f64> {
    match value {
        PointValue::Float(v) => Ok(*v),
        PointValue::Int(v) => Ok(*v as f64),
        PointValue::String(s) => s.trim().parse::<f64>().map_err(|_| {
            PointError::InvalidValue(format!("expected a number, got {}", s))
        }),
        other => Err(PointError::InvalidValue(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

impl Point for NumericPoint {
    fn core(&self) -> &PointCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PointCore {
        &mut self.core
    }

    fn units(&self) -> Option<&str> {
        self.core.properties().unit()
    }

    fn set(&mut self, value: PointValue) -> Result<()> {
        let coerced = coerce_numeric(&value)?;
        self.core.write_routed(PointValue::Float(coerced))
    }
}

impl fmt::Display for NumericPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.core.last_value();
        match (value.as_f64(), self.units()) {
            (Some(v), Some(unit)) => write!(f, "{} : {:.2} {}", self.core.name(), v, unit),
            (Some(v), None) => write!(f, "{} : {:.2}", self.core.name(), v),
            _ => write!(f, "{} : {}", self.core.name(), value),
        }
    }
}
