//! Point identity and metadata
//!
//! Plain owned data, one record per point. The `simulated` and `overridden`
//! flags are independent: a point can be simulated while an override is still
//! parked in the priority array, and each release operation clears only its
//! own flag.

use crate::object_type::ObjectType;
use serde::{Deserialize, Serialize};

/// Engineering units of an analog point, or the state table of a
/// multi-state point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitsState {
    /// Unit label, e.g. "degreesCelsius"
    Unit(String),
    /// Ordered state labels; indices on the wire are 1-based
    States(Vec<String>),
}

/// Identity and metadata of one device point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointProperties {
    /// Point name, unique within its device
    pub name: String,
    /// Object category
    pub object_type: ObjectType,
    /// Object instance number
    pub address: u32,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Units label or state table, if the category carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units_state: Option<UnitsState>,
    /// A simulate command is in effect
    #[serde(default)]
    pub simulated: bool,
    /// An override is parked at the override priority
    #[serde(default)]
    pub overridden: bool,
}

impl PointProperties {
    pub fn new(name: impl Into<String>, object_type: ObjectType, address: u32) -> Self {
        Self {
            name: name.into(),
            object_type,
            address,
            description: String::new(),
            units_state: None,
            simulated: false,
            overridden: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.units_state = Some(UnitsState::Unit(unit.into()));
        self
    }

    pub fn with_states(mut self, states: Vec<String>) -> Self {
        self.units_state = Some(UnitsState::States(states));
        self
    }

    /// Unit label, when the point carries one
    pub fn unit(&self) -> Option<&str> {
        match &self.units_state {
            Some(UnitsState::Unit(u)) => Some(u.as_str()),
            _ => None,
        }
    }

    /// State table, when the point carries one
    pub fn states(&self) -> Option<&[String]> {
        match &self.units_state {
            Some(UnitsState::States(s)) => Some(s.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let props = PointProperties::new("ZN-T", ObjectType::AnalogInput, 1);
        assert_eq!(props.name, "ZN-T");
        assert_eq!(props.address, 1);
        assert!(props.description.is_empty());
        assert!(props.units_state.is_none());
        assert!(!props.simulated);
        assert!(!props.overridden);
    }

    #[test]
    fn test_unit_accessor() {
        let props = PointProperties::new("ZN-T", ObjectType::AnalogInput, 1)
            .with_description("Zone temperature")
            .with_unit("degreesCelsius");
        assert_eq!(props.description, "Zone temperature");
        assert_eq!(props.unit(), Some("degreesCelsius"));
        assert_eq!(props.states(), None);
    }

    #[test]
    fn test_states_accessor() {
        let props = PointProperties::new("FAN-MODE", ObjectType::MultiStateValue, 2).with_states(
            vec!["off".to_string(), "on".to_string(), "auto".to_string()],
        );
        assert_eq!(props.unit(), None);
        assert_eq!(props.states().map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_units_state_untagged_serde() {
        let unit: UnitsState = serde_json::from_str("\"percent\"").unwrap();
        assert_eq!(unit, UnitsState::Unit("percent".to_string()));

        let states: UnitsState = serde_json::from_str("[\"off\",\"on\"]").unwrap();
        assert_eq!(
            states,
            UnitsState::States(vec!["off".to_string(), "on".to_string()])
        );
    }

    #[test]
    fn test_flags_are_independent() {
        let mut props = PointProperties::new("DAMPER", ObjectType::AnalogOutput, 3);
        props.simulated = true;
        props.overridden = true;
        assert!(props.simulated && props.overridden);
    }
}
