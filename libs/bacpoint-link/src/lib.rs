//! BacPoint Link Library
//!
//! Collaborator boundary between point models and the field devices behind
//! them. This library provides the raw value representation, the synchronous
//! `Device`/`Network` trait contracts, the textual command builders, and an
//! in-memory collaborator for testing and offline use.
//!
//! # Modules
//!
//! - `value`: Raw point value representation crossing the device boundary
//! - `traits`: `Device` and `Network` collaborator contracts
//! - `command`: Textual command builders for write/simulate/release
//! - `memory`: In-memory `Device` + `Network` with a command journal

pub mod command;
pub mod memory;
pub mod traits;
pub mod value;

// Re-exports for convenience
pub use command::{CommandTarget, PRESENT_VALUE, RELINQUISH_DEFAULT};
pub use memory::{CommandKind, CommandRecord, MemoryDevice, MemoryDeviceStats};
pub use traits::{Device, Network};
pub use value::PointValue;
