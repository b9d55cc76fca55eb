//! Point table configuration
//!
//! A point table describes every point of one device: addressing, object
//! categories, units/state tables, and the history retention shared by all
//! of them. Tables load from TOML/YAML/JSON files via figment.

use crate::definition::{build_point, PointDefinition};
use crate::error::{PointError, Result};
use crate::history::HistoryRetention;
use crate::point::Point;
use bacpoint_link::Device;
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// History settings shared by all points of a device
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Samples kept per point; leave out for unbounded
    #[serde(default, skip_serializing_if = "HistoryRetention::is_unbounded")]
    pub retention: HistoryRetention,
}

/// Point table of one device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointTable {
    /// Device address on the field bus
    pub device_address: String,
    /// Human-readable device name
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub points: Vec<PointDefinition>,
}

/// Load configuration from `config/{name}.*` files and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables prefixed `BACPOINT_`
/// 2. config/{name}.json
/// 3. config/{name}.yaml
/// 4. config/{name}.toml
pub fn load_config<T>(name: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let figment = Figment::new()
        .merge(Toml::file(format!("config/{}.toml", name)))
        .merge(Yaml::file(format!("config/{}.yaml", name)))
        .merge(Json::file(format!("config/{}.json", name)))
        .merge(Env::prefixed("BACPOINT_"));

    figment
        .extract()
        .map_err(|e| PointError::Config(format!("Failed to load configuration: {}", e)))
}

/// Load configuration from a specific file, picking the format by extension
pub fn load_config_from_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PointError::Config("Config file must have an extension".to_string()))?;

    let figment = match extension {
        "toml" => Figment::new().merge(Toml::file(path)),
        "yaml" | "yml" => Figment::new().merge(Yaml::file(path)),
        "json" => Figment::new().merge(Json::file(path)),
        _ => {
            return Err(PointError::Config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        }
    };

    figment
        .extract()
        .map_err(|e| PointError::Config(format!("Failed to load configuration from file: {}", e)))
}

/// Save configuration to a file, picking the format by extension
pub fn save_config_to_file<T, P>(config: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PointError::Config("Config file must have an extension".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| PointError::Config(format!("Failed to create {}: {}", parent.display(), e)))?;
    }

    let content = match extension {
        "toml" => {
            toml::to_string_pretty(config).map_err(|e| PointError::Serialization(e.to_string()))?
        }
        "yaml" | "yml" => {
            serde_yaml::to_string(config).map_err(|e| PointError::Serialization(e.to_string()))?
        }
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| PointError::Serialization(e.to_string()))?,
        _ => {
            return Err(PointError::Config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        }
    };

    std::fs::write(path, content)
        .map_err(|e| PointError::Config(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

/// Build every point of a table against one device
pub fn build_points(device: &Arc<dyn Device>, table: &PointTable) -> Vec<Box<dyn Point>> {
    let points: Vec<Box<dyn Point>> = table
        .points
        .iter()
        .map(|definition| build_point(Arc::clone(device), definition, table.history.retention))
        .collect();
    debug!("{}: built {} points", table.device_address, points.len());
    points
}
