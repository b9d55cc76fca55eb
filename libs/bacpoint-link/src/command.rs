//! Textual command building
//!
//! This module is the single source of truth for the command grammar a
//! `Network` implementation receives. Points never assemble command strings
//! themselves; they hold a `CommandTarget` and ask it for the exact text.
//!
//! **Command grammar:**
//! - Write: `{device} {objectType} {address} {property} {value}`
//! - Write at priority p: `{device} {objectType} {address} {property} {value} - {p}`
//! - Simulate: `{device} {objectType} {address} presentValue {value}`
//! - Release: `{device} {objectType} {address}`

use crate::value::PointValue;

/// BACnet property identifier of the commandable present value
pub const PRESENT_VALUE: &str = "presentValue";

/// BACnet property identifier of the fallback the priority array relinquishes to
pub const RELINQUISH_DEFAULT: &str = "relinquishDefault";

/// Addressing triple identifying one object on one device
///
/// **Usage Example:**
/// ```
/// use bacpoint_link::{CommandTarget, PointValue, PRESENT_VALUE};
///
/// let target = CommandTarget::new("2:5", "analogValue", 1);
///
/// let cmd = target.write_command(PRESENT_VALUE, &PointValue::Float(10.0), None);
/// assert_eq!(cmd, "2:5 analogValue 1 presentValue 10.0");
///
/// let cmd = target.write_command(PRESENT_VALUE, &PointValue::Null, Some(8));
/// assert_eq!(cmd, "2:5 analogValue 1 presentValue null - 8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTarget {
    /// Device address on the field bus
    pub device_address: String,
    /// Object type tag in wire form (camelCase, e.g. "analogValue")
    pub object_type: String,
    /// Object instance number
    pub object_address: u32,
}

impl CommandTarget {
    pub fn new(
        device_address: impl Into<String>,
        object_type: impl Into<String>,
        object_address: u32,
    ) -> Self {
        Self {
            device_address: device_address.into(),
            object_type: object_type.into(),
            object_address,
        }
    }

    /// Build a property write command
    ///
    /// With a priority the ` - {p}` suffix selects the priority-array slot;
    /// without one the device applies its own default slot. Priority range
    /// checking belongs to the caller, this builder formats what it is given.
    pub fn write_command(
        &self,
        property: &str,
        value: &PointValue,
        priority: Option<u8>,
    ) -> String {
        match priority {
            Some(p) => format!(
                "{} {} {} {} {} - {}",
                self.device_address, self.object_type, self.object_address, property, value, p
            ),
            None => format!(
                "{} {} {} {} {}",
                self.device_address, self.object_type, self.object_address, property, value
            ),
        }
    }

    /// Build a simulate command: an out-of-service present value write
    pub fn sim_command(&self, value: &PointValue) -> String {
        format!(
            "{} {} {} {} {}",
            self.device_address, self.object_type, self.object_address, PRESENT_VALUE, value
        )
    }

    /// Build a release command: only the addressing triple, no value
    pub fn release_command(&self) -> String {
        format!(
            "{} {} {}",
            self.device_address, self.object_type, self.object_address
        )
    }
}
