//! Multi-state (enumerated) point
//!
//! Raw values are 1-based indices into the configured state table. Reads
//! decode the index to its label; writes accept a label or an index and
//! always send the index.

use std::fmt;

use bacpoint_link::PointValue;

use crate::error::{PointError, Result};
use crate::point::{Point, PointCore};

/// Multi-state point decoding 1-based indices through a state table
pub struct EnumPoint {
    core: PointCore,
}

impl EnumPoint {
    pub fn new(core: PointCore) -> Self {
        Self { core }
    }

    /// Read fresh from the device and decode the state label
    ///
    /// The raw value must convert to an integer, and the index must fall
    /// inside the state table (indices are 1-based; 0 is never valid).
    pub fn enum_value(&mut self) -> Result<String> {
        let raw = Point::read_value(self)?;
        let index = state_index(&raw)?;
        let states = self.core.properties().states().unwrap_or(&[]);
        let len = states.len();
        if index < 1 || index as usize > len {
            return Err(PointError::IndexOutOfRange { index, len });
        }
        Ok(states[(index - 1) as usize].clone())
    }

    /// Configured state labels, empty when the point carries none
    pub fn states(&self) -> &[String] {
        self.core.properties().states().unwrap_or(&[])
    }

    fn label_of(&self, raw: &PointValue) -> Option<&str> {
        let index = state_index(raw).ok()?;
        let states = self.core.properties().states()?;
        if index >= 1 && index as usize <= states.len() {
            Some(states[(index - 1) as usize].as_str())
        } else {
            None
        }
    }
}

fn state_index(value: &PointValue) -> Result<i64> {
    match value {
        PointValue::Int(v) => Ok(*v),
        PointValue::Float(v) => Ok(*v as i64),
        PointValue::String(s) => s.trim().parse::<i64>().map_err(|_| {
            PointError::InvalidValue(format!("expected a state index, got {}", s))
        }),
        other => Err(PointError::InvalidValue(format!(
            "expected a state index, got {}",
            other
        ))),
    }
}

impl Point for EnumPoint {
    fn core(&self) -> &PointCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PointCore {
        &mut self.core
    }

    fn units(&self) -> Option<&str> {
        None
    }

    fn set(&mut self, value: PointValue) -> Result<()> {
        let index = {
            let states = self.core.properties().states().unwrap_or(&[]);
            match &value {
                PointValue::Int(v) => {
                    if *v < 1 || *v as usize > states.len() {
                        return Err(PointError::IndexOutOfRange {
                            index: *v,
                            len: states.len(),
                        });
                    }
                    *v
                }
                PointValue::String(s) => {
                    match states.iter().position(|st| st.eq_ignore_ascii_case(s)) {
                        Some(pos) => (pos + 1) as i64,
                        None => {
                            return Err(PointError::InvalidValue(format!(
                                "unknown state label: {}",
                                s
                            )))
                        }
                    }
                }
                other => {
                    return Err(PointError::InvalidValue(format!(
                        "expected a state label or index, got {}",
                        other
                    )))
                }
            }
        };
        self.core.write_routed(PointValue::Int(index))
    }
}

impl fmt::Display for EnumPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.core.last_value();
        match self.label_of(raw) {
            Some(label) => write!(f, "{} : {}", self.core.name(), label),
            None => write!(f, "{} : {}", self.core.name(), raw),
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use crate::object_type::ObjectType;
    use crate::properties::PointProperties;
    use bacpoint_link::{CommandKind, MemoryDevice};
    use std::sync::Arc;

    fn fan_mode(device: &Arc<MemoryDevice>, object_type: ObjectType) -> EnumPoint {
        let properties = PointProperties::new("FAN-MODE", object_type, 3).with_states(vec![
            "off".to_string(),
            "on".to_string(),
            "auto".to_string(),
        ]);
        EnumPoint::new(PointCore::new(
            Arc::clone(device) as Arc<dyn bacpoint_link::Device>,
            properties,
        ))
    }

    #[test]
    fn test_enum_value_one_based() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut point = fan_mode(&device, ObjectType::MultiStateValue);
        assert_eq!(point.states(), ["off", "on", "auto"]);

        device.set_value("FAN-MODE", 1i64);
        assert_eq!(point.enum_value().unwrap(), "off");

        device.set_value("FAN-MODE", 3i64);
        assert_eq!(point.enum_value().unwrap(), "auto");

        // Floats and numeric strings convert
        device.set_value("FAN-MODE", 2.0);
        assert_eq!(point.enum_value().unwrap(), "on");
    }

    #[test]
    fn test_enum_value_out_of_range() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut point = fan_mode(&device, ObjectType::MultiStateValue);

        device.set_value("FAN-MODE", 0i64);
        assert!(matches!(
            point.enum_value().unwrap_err(),
            PointError::IndexOutOfRange { index: 0, len: 3 }
        ));

        device.set_value("FAN-MODE", 4i64);
        assert!(matches!(
            point.enum_value().unwrap_err(),
            PointError::IndexOutOfRange { index: 4, len: 3 }
        ));
    }

    #[test]
    fn test_enum_value_non_integer_raw() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut point = fan_mode(&device, ObjectType::MultiStateValue);

        device.set_value("FAN-MODE", "fast");
        assert!(matches!(
            point.enum_value().unwrap_err(),
            PointError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_enum_value_without_state_table() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let properties = PointProperties::new("MODE", ObjectType::MultiStateInput, 9);
        let mut point = EnumPoint::new(PointCore::new(
            Arc::clone(&device) as Arc<dyn bacpoint_link::Device>,
            properties,
        ));

        device.set_value("MODE", 1i64);
        assert!(matches!(
            point.enum_value().unwrap_err(),
            PointError::IndexOutOfRange { index: 1, len: 0 }
        ));
    }

    #[test]
    fn test_set_by_label_sends_index() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut point = fan_mode(&device, ObjectType::MultiStateValue);

        point.set(PointValue::String("Auto".to_string())).unwrap();
        assert_eq!(
            device.commands(CommandKind::Write),
            vec!["2:5 multiStateValue 3 presentValue 3".to_string()]
        );
    }

    #[test]
    fn test_set_by_index_validated() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut point = fan_mode(&device, ObjectType::MultiStateValue);

        point.set(PointValue::Int(2)).unwrap();
        assert!(matches!(
            point.set(PointValue::Int(4)).unwrap_err(),
            PointError::IndexOutOfRange { index: 4, len: 3 }
        ));
        assert!(matches!(
            point.set(PointValue::String("fast".to_string())).unwrap_err(),
            PointError::InvalidValue(_)
        ));
        assert_eq!(device.commands(CommandKind::Write).len(), 1);
    }

    #[test]
    fn test_display_decodes_label() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        device.set_value("FAN-MODE", 2i64);
        let mut point = fan_mode(&device, ObjectType::MultiStateInput);

        assert_eq!(point.to_string(), "FAN-MODE : null");
        point.read_value().unwrap();
        assert_eq!(point.to_string(), "FAN-MODE : on");
    }
}
