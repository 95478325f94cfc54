//! Operating system config loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, OperatingSystemConfig};

/// Read an operating system config document.
///
/// Files ending in `.json` are decoded as JSON, everything else as YAML.
pub fn load_operating_system_config(path: &Path) -> Result<OperatingSystemConfig, AppError> {
    let content = fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|err| err.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|err| err.to_string())
    };

    parsed.map_err(|details| AppError::InputParse {
        what: format!("operating system config {}", path.display()),
        details,
    })
}
