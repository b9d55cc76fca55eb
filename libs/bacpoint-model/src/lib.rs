//! BacPoint Model Library
//!
//! Models a single addressable data point on a remote automation device:
//! read-through access with an append-only history, priority-array write
//! arbitration, and the simulate/override/release state machine used to
//! wrest control of a point from its controller and hand it back.
//!
//! # Modules
//!
//! - `object_type`: BACnet-style object categories and their classifications
//! - `properties`: Point identity and metadata
//! - `history`: Observed-value log with retention policy
//! - `point`: Core behavior and the `Point` trait
//! - `numeric` / `boolean` / `enumerated`: The three point variants
//! - `definition`: Point definitions and the construction factory
//! - `config`: Point table loading and saving
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bacpoint_link::MemoryDevice;
//! use bacpoint_model::{NumericPoint, ObjectType, Point, PointCore, PointProperties};
//!
//! let device = Arc::new(MemoryDevice::new("2:5"));
//! device.set_value("ZN-T", 21.5);
//!
//! let properties = PointProperties::new("ZN-T", ObjectType::AnalogInput, 1)
//!     .with_unit("degreesCelsius");
//! let mut point = NumericPoint::new(PointCore::new(device, properties));
//!
//! let value = point.read_value().unwrap();
//! assert_eq!(value.as_f64(), Some(21.5));
//! assert_eq!(point.history().len(), 2); // seed sample + this read
//! ```

pub mod boolean;
pub mod config;
pub mod definition;
pub mod enumerated;
pub mod error;
pub mod history;
pub mod logging;
pub mod numeric;
pub mod object_type;
pub mod point;
pub mod properties;

// Re-exports for convenience
pub use bacpoint_link::{Device, Network, PointValue};
pub use boolean::BooleanPoint;
pub use config::{
    build_points, load_config, load_config_from_file, save_config_to_file, HistoryConfig,
    PointTable,
};
pub use definition::{build_point, PointDefinition};
pub use enumerated::EnumPoint;
pub use error::{PointError, Result};
pub use history::{HistoryLog, HistoryRetention, HistorySample};
pub use logging::{init_default_logging, init_logging, init_test_logging, LogConfig, LogFormat};
pub use numeric::NumericPoint;
pub use object_type::{ObjectType, PointKind, WriteRoute};
pub use point::{Point, PointCore, OVERRIDE_PRIORITY};
pub use properties::{PointProperties, UnitsState};
