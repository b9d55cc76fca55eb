//! Boolean (binary) point
//!
//! The canonical raw form is the state text `"active"`/`"inactive"`. Reads
//! cache the decoded boolean beside the raw history; writes accept booleans
//! and the usual state spellings and always send the canonical text.

use std::fmt;

use bacpoint_link::PointValue;

use crate::error::{PointError, Result};
use crate::point::{Point, PointCore};

/// Binary point decoding `"active"`/`"inactive"` state text
pub struct BooleanPoint {
    core: PointCore,
    last_bool: Option<bool>,
}

impl BooleanPoint {
    pub fn new(core: PointCore) -> Self {
        Self {
            core,
            last_bool: None,
        }
    }

    /// Read fresh from the device and decode: `"active"` and `true` are
    /// truthy, everything else is false
    pub fn bool_value(&mut self) -> Result<bool> {
        let raw = Point::read_value(self)?;
        Ok(decode_bool(&raw))
    }

    /// Decoded form of the most recent read, if any read has happened
    pub fn last_bool(&self) -> Option<bool> {
        self.last_bool
    }
}

fn decode_bool(value: &PointValue) -> bool {
    match value {
        PointValue::String(s) => s == "active",
        PointValue::Bool(b) => *b,
        _ => false,
    }
}

fn canonical_state(value: &PointValue) -> Result<&'static str> {
    match value {
        PointValue::Bool(true) => Ok("active"),
        PointValue::Bool(false) => Ok("inactive"),
        PointValue::String(s) => match s.to_lowercase().as_str() {
            "active" | "true" => Ok("active"),
            "inactive" | "false" => Ok("inactive"),
            _ => Err(PointError::InvalidValue(format!(
                "expected a binary state, got {}",
                s
            ))),
        },
        other => Err(PointError::InvalidValue(format!(
            "expected a binary state, got {}",
            other
        ))),
    }
}

impl Point for BooleanPoint {
    fn core(&self) -> &PointCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PointCore {
        &mut self.core
    }

    fn units(&self) -> Option<&str> {
        None
    }

    // Cache the decoded form beside the raw history
    fn read_value(&mut self) -> Result<PointValue> {
        let raw = self.core.read_value()?;
        self.last_bool = Some(decode_bool(&raw));
        Ok(raw)
    }

    fn set(&mut self, value: PointValue) -> Result<()> {
        let state = canonical_state(&value)?;
        self.core
            .write_routed(PointValue::String(state.to_string()))
    }
}

impl fmt::Display for BooleanPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {}",
            self.core.name(),
            decode_bool(self.core.last_value())
        )
    }
}
