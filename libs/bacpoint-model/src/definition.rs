//! Point definitions and construction
//!
//! A `PointDefinition` is the configuration-file shape of one point. The
//! `build_point` factory turns a definition into the right variant for its
//! object category.

use std::sync::Arc;

use bacpoint_link::{Device, PointValue};
use serde::{Deserialize, Serialize};

use crate::boolean::BooleanPoint;
use crate::enumerated::EnumPoint;
use crate::history::{HistoryLog, HistoryRetention};
use crate::numeric::NumericPoint;
use crate::object_type::{ObjectType, PointKind};
use crate::point::{Point, PointCore};
use crate::properties::{PointProperties, UnitsState};

/// Configuration record describing one point on a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDefinition {
    /// Point name, unique within its device
    pub name: String,
    /// Object category ("type" in config files)
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Object instance number
    pub address: u32,
    #[serde(default)]
    pub description: String,
    /// Engineering unit label for analog points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Ordered state labels for multi-state points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    /// Seed value for the history log; null when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<PointValue>,
}

impl PointDefinition {
    pub fn new(name: impl Into<String>, object_type: ObjectType, address: u32) -> Self {
        Self {
            name: name.into(),
            object_type,
            address,
            description: String::new(),
            units: None,
            states: None,
            initial: None,
        }
    }

    /// Runtime properties for this definition
    ///
    /// A state table takes precedence over a unit label when both are given.
    pub fn to_properties(&self) -> PointProperties {
        let units_state = match (&self.states, &self.units) {
            (Some(states), _) => Some(UnitsState::States(states.clone())),
            (None, Some(unit)) => Some(UnitsState::Unit(unit.clone())),
            (None, None) => None,
        };
        PointProperties {
            name: self.name.clone(),
            object_type: self.object_type,
            address: self.address,
            description: self.description.clone(),
            units_state,
            simulated: false,
            overridden: false,
        }
    }
}

/// Build the point variant matching the definition's object category
pub fn build_point(
    device: Arc<dyn Device>,
    definition: &PointDefinition,
    retention: HistoryRetention,
) -> Box<dyn Point> {
    let initial = definition.initial.clone().unwrap_or(PointValue::Null);
    let history = HistoryLog::with_retention(initial, retention);
    let core = PointCore::with_history(device, definition.to_properties(), history);
    match definition.object_type.kind() {
        PointKind::Numeric => Box::new(NumericPoint::new(core)),
        PointKind::Boolean => Box::new(BooleanPoint::new(core)),
        PointKind::Enum => Box::new(EnumPoint::new(core)),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use bacpoint_link::{CommandKind, MemoryDevice};

    #[test]
    fn test_to_properties_units_and_states() {
        let mut definition = PointDefinition::new("ZN-T", ObjectType::AnalogInput, 1);
        definition.units = Some("degreesCelsius".to_string());
        let props = definition.to_properties();
        assert_eq!(props.unit(), Some("degreesCelsius"));

        let mut definition = PointDefinition::new("FAN-MODE", ObjectType::MultiStateValue, 2);
        definition.states = Some(vec!["off".to_string(), "on".to_string()]);
        definition.units = Some("ignored".to_string());
        let props = definition.to_properties();
        assert_eq!(props.unit(), None);
        assert_eq!(props.states().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_definition_serde_type_field() {
        let yaml = "name: ZN-T\ntype: analogInput\naddress: 1\nunits: degreesCelsius\n";
        let definition: PointDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(definition.object_type, ObjectType::AnalogInput);
        assert_eq!(definition.units.as_deref(), Some("degreesCelsius"));
        assert_eq!(definition.initial, None);
    }

    #[test]
    fn test_build_point_variant_behavior() {
        let device = Arc::new(MemoryDevice::new("2:5"));

        // Numeric: set coerces to float
        let definition = PointDefinition::new("SP", ObjectType::AnalogValue, 1);
        let mut point = build_point(
            Arc::clone(&device) as Arc<dyn Device>,
            &definition,
            HistoryRetention::Unbounded,
        );
        point.set(PointValue::Int(21)).unwrap();
        assert_eq!(
            device.last_command().unwrap().command,
            "2:5 analogValue 1 presentValue 21.0"
        );

        // Boolean: set sends state text
        let definition = PointDefinition::new("EN", ObjectType::BinaryValue, 2);
        let mut point = build_point(
            Arc::clone(&device) as Arc<dyn Device>,
            &definition,
            HistoryRetention::Unbounded,
        );
        point.set(PointValue::Bool(true)).unwrap();
        assert_eq!(
            device.last_command().unwrap().command,
            "2:5 binaryValue 2 presentValue active"
        );

        // Enum: set sends 1-based index
        let mut definition = PointDefinition::new("MODE", ObjectType::MultiStateValue, 3);
        definition.states = Some(vec!["off".to_string(), "on".to_string()]);
        let mut point = build_point(
            Arc::clone(&device) as Arc<dyn Device>,
            &definition,
            HistoryRetention::Unbounded,
        );
        point.set(PointValue::String("on".to_string())).unwrap();
        assert_eq!(
            device.last_command().unwrap().command,
            "2:5 multiStateValue 3 presentValue 2"
        );

        assert_eq!(device.commands(CommandKind::Write).len(), 3);
    }

    #[test]
    fn test_build_point_seeds_initial_value() {
        let device = Arc::new(MemoryDevice::new("2:5"));
        let mut definition = PointDefinition::new("SP", ObjectType::AnalogValue, 1);
        definition.initial = Some(PointValue::Float(20.0));

        let point = build_point(
            Arc::clone(&device) as Arc<dyn Device>,
            &definition,
            HistoryRetention::Unbounded,
        );
        assert_eq!(point.last_value(), &PointValue::Float(20.0));
        assert_eq!(point.history().len(), 1);
    }
}
