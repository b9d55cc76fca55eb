//! Core point behavior and the `Point` trait
//!
//! `PointCore` implements everything shared by the three point variants:
//! read-through history capture, priority-checked writes, and the
//! simulate/override/release state machine. The `Point` trait forwards to
//! the core and requires only the variant-specific pieces.
//!
//! All calls are synchronous and block until the device collaborator
//! answers. Mutating operations take `&mut self`, so exclusive access per
//! point is enforced at compile time; no internal locking.

use std::fmt;
use std::sync::Arc;

use bacpoint_link::{CommandTarget, Device, PointValue, PRESENT_VALUE, RELINQUISH_DEFAULT};
use tracing::{debug, info};

use crate::error::{PointError, Result};
use crate::history::{HistoryLog, HistoryRetention};
use crate::object_type::WriteRoute;
use crate::properties::PointProperties;

/// Priority-array slot used by `ovr` and `auto`
pub const OVERRIDE_PRIORITY: u8 = 8;

/// Shared state and behavior of one device point
///
/// Owns the point's properties and history, and holds a shared handle to the
/// device the point lives on. The device is the arbiter of the priority
/// array; the core only formats the requested slot into command text.
pub struct PointCore {
    device: Arc<dyn Device>,
    properties: PointProperties,
    history: HistoryLog,
}

impl PointCore {
    /// Create a core with an unbounded history seeded with a null sample
    pub fn new(device: Arc<dyn Device>, properties: PointProperties) -> Self {
        Self::with_history(device, properties, HistoryLog::new(PointValue::Null))
    }

    /// Create a core with a prepared history log (seed value, retention)
    pub fn with_history(
        device: Arc<dyn Device>,
        properties: PointProperties,
        history: HistoryLog,
    ) -> Self {
        Self {
            device,
            properties,
            history,
        }
    }

    /// Create a core with a history retention policy and a null seed
    pub fn with_retention(
        device: Arc<dyn Device>,
        properties: PointProperties,
        retention: HistoryRetention,
    ) -> Self {
        Self::with_history(
            device,
            properties,
            HistoryLog::with_retention(PointValue::Null, retention),
        )
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn properties(&self) -> &PointProperties {
        &self.properties
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    fn target(&self) -> CommandTarget {
        CommandTarget::new(
            self.device.address(),
            self.properties.object_type.as_str(),
            self.properties.address,
        )
    }

    /// Read the present value from the device and append it to the history
    ///
    /// Every successful read grows the history by exactly one sample; a
    /// failed read leaves it untouched and propagates the device error.
    pub fn read_value(&mut self) -> Result<PointValue> {
        let value = self.device.read(&self.properties.name)?;
        self.history.append(value.clone());
        debug!("{}: read {}", self.properties.name, value);
        Ok(value)
    }

    /// Most recent known value, without talking to the device
    pub fn last_value(&self) -> &PointValue {
        self.history.last_value()
    }

    /// Write the present value with no explicit priority
    pub fn write(&self, value: PointValue) -> Result<()> {
        self.write_property(PRESENT_VALUE, value, None)
    }

    /// Write an arbitrary property, optionally into a priority-array slot
    ///
    /// A priority outside [1, 16] fails with `InvalidPriority` before any
    /// command is sent.
    pub fn write_property(
        &self,
        property: &str,
        value: PointValue,
        priority: Option<u8>,
    ) -> Result<()> {
        if let Some(p) = priority {
            if !(1..=16).contains(&p) {
                return Err(PointError::InvalidPriority(p));
            }
        }
        let command = self.target().write_command(property, &value, priority);
        debug!("{}: write {}", self.properties.name, command);
        self.device.network().write(&command)?;
        Ok(())
    }

    /// Write the relinquish default: the value the point falls back to when
    /// every priority slot is vacant
    pub fn set_default(&self, value: PointValue) -> Result<()> {
        self.write_property(RELINQUISH_DEFAULT, value, None)
    }

    /// Force the present value, taking the point out of service
    ///
    /// The controller stops updating the point until `release` is called.
    pub fn sim(&mut self, value: PointValue) -> Result<()> {
        let command = self.target().sim_command(&value);
        self.device.network().sim(&command)?;
        self.properties.simulated = true;
        info!("{}: simulating {}", self.properties.name, value);
        Ok(())
    }

    /// Return the point to its controller, ending any simulation
    pub fn release(&mut self) -> Result<()> {
        let command = self.target().release_command();
        self.device.network().release(&command)?;
        self.properties.simulated = false;
        info!("{}: released to controller", self.properties.name);
        Ok(())
    }

    /// Write the present value at the override priority
    pub fn ovr(&mut self, value: PointValue) -> Result<()> {
        info!("{}: override {}", self.properties.name, value);
        self.write_property(PRESENT_VALUE, value, Some(OVERRIDE_PRIORITY))?;
        self.properties.overridden = true;
        Ok(())
    }

    /// Vacate the override slot so lower priorities win again
    pub fn auto(&mut self) -> Result<()> {
        self.write_property(PRESENT_VALUE, PointValue::Null, Some(OVERRIDE_PRIORITY))?;
        self.properties.overridden = false;
        info!("{}: override released", self.properties.name);
        Ok(())
    }

    /// Route a value assignment by object category
    ///
    /// Software points are written directly, command outputs go through the
    /// override slot, controller-owned inputs are simulated.
    pub fn write_routed(&mut self, value: PointValue) -> Result<()> {
        match self.properties.object_type.write_route() {
            WriteRoute::Direct => self.write(value),
            WriteRoute::Override => self.ovr(value),
            WriteRoute::Simulate => self.sim(value),
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.properties.simulated
    }

    pub fn is_overridden(&self) -> bool {
        self.properties.overridden
    }
}

/// One addressable point on a device
///
/// Variants supply `units` and the type-checked `set`; everything else is
/// shared behavior forwarded to the `PointCore`.
pub trait Point: fmt::Display + Send + Sync {
    fn core(&self) -> &PointCore;

    fn core_mut(&mut self) -> &mut PointCore;

    /// Engineering units label, if this point type carries one
    fn units(&self) -> Option<&str>;

    /// Validate a value for this point type and route it to the device
    fn set(&mut self, value: PointValue) -> Result<()>;

    fn name(&self) -> &str {
        self.core().name()
    }

    fn properties(&self) -> &PointProperties {
        self.core().properties()
    }

    /// Read the present value, appending it to the history
    fn read_value(&mut self) -> Result<PointValue> {
        self.core_mut().read_value()
    }

    /// Most recent known value, no device round trip
    fn last_value(&self) -> &PointValue {
        self.core().last_value()
    }

    fn history(&self) -> &HistoryLog {
        self.core().history()
    }

    fn write(&self, value: PointValue) -> Result<()> {
        self.core().write(value)
    }

    fn write_property(&self, property: &str, value: PointValue, priority: Option<u8>) -> Result<()> {
        self.core().write_property(property, value, priority)
    }

    fn set_default(&self, value: PointValue) -> Result<()> {
        self.core().set_default(value)
    }

    fn sim(&mut self, value: PointValue) -> Result<()> {
        self.core_mut().sim(value)
    }

    fn release(&mut self) -> Result<()> {
        self.core_mut().release()
    }

    fn ovr(&mut self, value: PointValue) -> Result<()> {
        self.core_mut().ovr(value)
    }

    fn auto(&mut self) -> Result<()> {
        self.core_mut().auto()
    }

    fn write_routed(&mut self, value: PointValue) -> Result<()> {
        self.core_mut().write_routed(value)
    }

    /// Look up an arbitrary property by name
    ///
    /// No point type supports this yet.
    fn read_property(&self, property: &str) -> Result<PointValue> {
        let _ = property;
        Err(PointError::Unsupported("property lookup"))
    }

    fn is_simulated(&self) -> bool {
        self.core().is_simulated()
    }

    fn is_overridden(&self) -> bool {
        self.core().is_overridden()
    }
}
