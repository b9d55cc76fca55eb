//! Trait definitions for the device collaborator boundary
//!
//! A point never talks to the field bus itself. It reads through its owning
//! `Device` and sends command text through the device's `Network`. Both
//! contracts are synchronous: every call blocks the caller until the
//! collaborator answers, and all arbitration (priority array, out-of-service)
//! happens on the device side.

use crate::value::PointValue;
use anyhow::Result;

/// Command entry points of the network a device is attached to
///
/// Commands are opaque text; see `command` for the exact forms. The three
/// entry points are distinct because the underlying protocol services differ
/// (a property write, an out-of-service write, an out-of-service release).
///
/// Implementations:
/// - `MemoryDevice`: In-memory journal backend for testing
pub trait Network: Send + Sync {
    /// Send a property write command
    fn write(&self, command: &str) -> Result<()>;

    /// Send a simulate command (out-of-service present value)
    fn sim(&self, command: &str) -> Result<()>;

    /// Send a release command (return the point to its controller)
    fn release(&self, command: &str) -> Result<()>;
}

/// A remote automation device exposing named points
///
/// Implementations:
/// - `MemoryDevice`: In-memory backend for testing and offline use
pub trait Device: Send + Sync {
    /// Device address on the field bus (e.g., "2:5" or "192.168.1.10")
    fn address(&self) -> &str;

    /// Read the current raw value of a named point
    ///
    /// Blocks until the device answers. Errors are reported as-is; the
    /// caller decides whether a failed read is fatal.
    fn read(&self, point_name: &str) -> Result<PointValue>;

    /// The network this device is attached to
    fn network(&self) -> &dyn Network;
}
