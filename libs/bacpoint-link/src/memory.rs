//! In-memory device implementation
//!
//! Implements both `Device` and `Network` over plain maps and a command
//! journal. Perfect for testing point behavior without a field bus: reads are
//! scripted per point name, every command is journaled with the entry point
//! that received it, and failures can be injected on either side.

use crate::traits::{Device, Network};
use crate::value::PointValue;
use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Which network entry point received a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Write,
    Sim,
    Release,
}

/// One journaled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub kind: CommandKind,
    pub command: String,
}

/// In-memory device with scripted values and a command journal
pub struct MemoryDevice {
    address: String,
    values: RwLock<HashMap<String, PointValue>>,
    reads: RwLock<Vec<String>>,
    journal: RwLock<Vec<CommandRecord>>,
    fail_reads: RwLock<Option<String>>,
    fail_commands: RwLock<Option<String>>,
}

impl MemoryDevice {
    /// Create a new in-memory device with the given field bus address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            values: RwLock::new(HashMap::new()),
            reads: RwLock::new(Vec::new()),
            journal: RwLock::new(Vec::new()),
            fail_reads: RwLock::new(None),
            fail_commands: RwLock::new(None),
        }
    }

    /// Script the value returned by subsequent reads of a point
    pub fn set_value(&self, point_name: impl Into<String>, value: impl Into<PointValue>) {
        self.values.write().insert(point_name.into(), value.into());
    }

    /// Make all subsequent reads fail with the given message
    pub fn fail_reads_with(&self, message: impl Into<String>) {
        *self.fail_reads.write() = Some(message.into());
    }

    /// Make all subsequent commands fail with the given message
    pub fn fail_commands_with(&self, message: impl Into<String>) {
        *self.fail_commands.write() = Some(message.into());
    }

    /// Remove any injected failures
    pub fn clear_failures(&self) {
        *self.fail_reads.write() = None;
        *self.fail_commands.write() = None;
    }

    /// Snapshot of all journaled commands, oldest first
    pub fn journal(&self) -> Vec<CommandRecord> {
        self.journal.read().clone()
    }

    /// Journaled command texts received by one entry point, oldest first
    pub fn commands(&self, kind: CommandKind) -> Vec<String> {
        self.journal
            .read()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.command.clone())
            .collect()
    }

    /// Most recent journaled command, if any
    pub fn last_command(&self) -> Option<CommandRecord> {
        self.journal.read().last().cloned()
    }

    /// Point names read so far, oldest first
    pub fn read_log(&self) -> Vec<String> {
        self.reads.read().clone()
    }

    /// Clear all scripted values, logs and injected failures (useful for testing)
    pub fn clear(&self) {
        self.values.write().clear();
        self.reads.write().clear();
        self.journal.write().clear();
        self.clear_failures();
    }

    /// Get statistics about recorded activity
    pub fn stats(&self) -> MemoryDeviceStats {
        let journal = self.journal.read();
        MemoryDeviceStats {
            read_count: self.reads.read().len(),
            write_count: journal.iter().filter(|r| r.kind == CommandKind::Write).count(),
            sim_count: journal.iter().filter(|r| r.kind == CommandKind::Sim).count(),
            release_count: journal
                .iter()
                .filter(|r| r.kind == CommandKind::Release)
                .count(),
        }
    }

    fn record(&self, kind: CommandKind, command: &str) -> Result<()> {
        if let Some(message) = self.fail_commands.read().clone() {
            bail!("{}", message);
        }
        self.journal.write().push(CommandRecord {
            kind,
            command: command.to_string(),
        });
        Ok(())
    }
}

impl Default for MemoryDevice {
    fn default() -> Self {
        Self::new("memory")
    }
}

/// Statistics about activity recorded by a memory device
#[derive(Debug, Clone)]
pub struct MemoryDeviceStats {
    pub read_count: usize,
    pub write_count: usize,
    pub sim_count: usize,
    pub release_count: usize,
}

impl Device for MemoryDevice {
    fn address(&self) -> &str {
        &self.address
    }

    fn read(&self, point_name: &str) -> Result<PointValue> {
        if let Some(message) = self.fail_reads.read().clone() {
            bail!("{}", message);
        }
        self.reads.write().push(point_name.to_string());
        match self.values.read().get(point_name) {
            Some(v) => Ok(v.clone()),
            None => bail!("no point named {} on device {}", point_name, self.address),
        }
    }

    fn network(&self) -> &dyn Network {
        self
    }
}

impl Network for MemoryDevice {
    fn write(&self, command: &str) -> Result<()> {
        self.record(CommandKind::Write, command)
    }

    fn sim(&self, command: &str) -> Result<()> {
        self.record(CommandKind::Sim, command)
    }

    fn release(&self, command: &str) -> Result<()> {
        self.record(CommandKind::Release, command)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_scripted_read() {
        let device = MemoryDevice::new("2:5");
        device.set_value("ZN-T", 21.5);

        let value = device.read("ZN-T").unwrap();
        assert_eq!(value, PointValue::Float(21.5));
        assert_eq!(device.read_log(), vec!["ZN-T".to_string()]);
    }

    #[test]
    fn test_unknown_point_read_fails() {
        let device = MemoryDevice::new("2:5");
        let err = device.read("MISSING").unwrap_err();
        assert!(err.to_string().contains("MISSING"));
        assert!(err.to_string().contains("2:5"));
    }

    #[test]
    fn test_journal_records_entry_points() {
        let device = MemoryDevice::new("2:5");
        device.network().write("a write").unwrap();
        device.network().sim("a sim").unwrap();
        device.network().release("a release").unwrap();

        let journal = device.journal();
        assert_eq!(journal.len(), 3);
        assert_eq!(journal[0].kind, CommandKind::Write);
        assert_eq!(journal[1].kind, CommandKind::Sim);
        assert_eq!(journal[2].kind, CommandKind::Release);
        assert_eq!(device.commands(CommandKind::Sim), vec!["a sim".to_string()]);
    }

    #[test]
    fn test_read_failure_injection() {
        let device = MemoryDevice::new("2:5");
        device.set_value("ZN-T", 21.5);
        device.fail_reads_with("device offline");

        let err = device.read("ZN-T").unwrap_err();
        assert_eq!(err.to_string(), "device offline");
        // Failed attempts are not logged as reads
        assert!(device.read_log().is_empty());

        device.clear_failures();
        assert_eq!(device.read("ZN-T").unwrap(), PointValue::Float(21.5));
    }

    #[test]
    fn test_command_failure_injection() {
        let device = MemoryDevice::new("2:5");
        device.fail_commands_with("bus congested");

        let err = device.network().write("cmd").unwrap_err();
        assert_eq!(err.to_string(), "bus congested");
        assert!(device.journal().is_empty());
    }

    #[test]
    fn test_clear_and_stats() {
        let device = MemoryDevice::new("2:5");
        device.set_value("B-1", PointValue::String("active".to_string()));
        device.read("B-1").unwrap();
        device.network().write("w").unwrap();
        device.network().write("w2").unwrap();

        let stats = device.stats();
        assert_eq!(stats.read_count, 1);
        assert_eq!(stats.write_count, 2);
        assert_eq!(stats.sim_count, 0);

        device.clear();
        assert!(device.journal().is_empty());
        assert!(device.read_log().is_empty());
        assert!(device.read("B-1").is_err());
    }
}
