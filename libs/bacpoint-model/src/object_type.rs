//! BACnet-style object categories
//!
//! A point's object category decides everything type-dependent: which write
//! path `write_routed` takes and which decode rules the variant applies. The
//! category is a closed enum, so both classifications are total matches with
//! no name sniffing anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object category of a device point
///
/// Wire form is the camelCase tag used by the underlying protocol stack
/// (e.g. `analogValue`); snake_case is accepted in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    /// Analog measurement owned by the controller
    #[serde(alias = "analog_input")]
    AnalogInput,

    /// Analog command output, arbitrated through the priority array
    #[serde(alias = "analog_output")]
    AnalogOutput,

    /// Analog software point, directly writable
    #[serde(alias = "analog_value")]
    AnalogValue,

    /// Binary measurement owned by the controller
    #[serde(alias = "binary_input")]
    BinaryInput,

    /// Binary command output, arbitrated through the priority array
    #[serde(alias = "binary_output")]
    BinaryOutput,

    /// Binary software point, directly writable
    #[serde(alias = "binary_value")]
    BinaryValue,

    /// Multi-state measurement owned by the controller
    #[serde(alias = "multi_state_input")]
    MultiStateInput,

    /// Multi-state command output, arbitrated through the priority array
    #[serde(alias = "multi_state_output")]
    MultiStateOutput,

    /// Multi-state software point, directly writable
    #[serde(alias = "multi_state_value")]
    MultiStateValue,
}

/// Which write path a point takes when a value is assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRoute {
    /// Software point: plain present value write
    Direct,
    /// Command output: write at the override priority
    Override,
    /// Controller-owned input: simulate (out-of-service) write
    Simulate,
}

/// Which decode/validation rules a point applies to raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Numeric,
    Boolean,
    Enum,
}

impl ObjectType {
    /// Get the camelCase tag used in command text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalogInput => "analogInput",
            Self::AnalogOutput => "analogOutput",
            Self::AnalogValue => "analogValue",
            Self::BinaryInput => "binaryInput",
            Self::BinaryOutput => "binaryOutput",
            Self::BinaryValue => "binaryValue",
            Self::MultiStateInput => "multiStateInput",
            Self::MultiStateOutput => "multiStateOutput",
            Self::MultiStateValue => "multiStateValue",
        }
    }

    /// Write path for value assignment
    pub fn write_route(&self) -> WriteRoute {
        match self {
            Self::AnalogValue | Self::BinaryValue | Self::MultiStateValue => WriteRoute::Direct,
            Self::AnalogOutput | Self::BinaryOutput | Self::MultiStateOutput => {
                WriteRoute::Override
            }
            Self::AnalogInput | Self::BinaryInput | Self::MultiStateInput => WriteRoute::Simulate,
        }
    }

    /// Decode rules for raw values of this category
    pub fn kind(&self) -> PointKind {
        match self {
            Self::AnalogInput | Self::AnalogOutput | Self::AnalogValue => PointKind::Numeric,
            Self::BinaryInput | Self::BinaryOutput | Self::BinaryValue => PointKind::Boolean,
            Self::MultiStateInput | Self::MultiStateOutput | Self::MultiStateValue => {
                PointKind::Enum
            }
        }
    }

    /// Check if this is a controller-owned input
    pub fn is_input(&self) -> bool {
        matches!(self.write_route(), WriteRoute::Simulate)
    }

    /// Check if this is a command output
    pub fn is_output(&self) -> bool {
        matches!(self.write_route(), WriteRoute::Override)
    }

    /// Check if this is a directly writable software point
    pub fn is_value(&self) -> bool {
        matches!(self.write_route(), WriteRoute::Direct)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "analoginput" => Ok(Self::AnalogInput),
            "analogoutput" => Ok(Self::AnalogOutput),
            "analogvalue" => Ok(Self::AnalogValue),
            "binaryinput" => Ok(Self::BinaryInput),
            "binaryoutput" => Ok(Self::BinaryOutput),
            "binaryvalue" => Ok(Self::BinaryValue),
            "multistateinput" => Ok(Self::MultiStateInput),
            "multistateoutput" => Ok(Self::MultiStateOutput),
            "multistatevalue" => Ok(Self::MultiStateValue),
            _ => Err(format!(
                "Invalid object type: {}. Must be an analog/binary/multiState input, output or value",
                s
            )),
        }
    }
}
