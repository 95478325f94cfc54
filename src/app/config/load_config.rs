//! Generator configuration loading from the filesystem.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, parse_config_content};
use crate::domain::{AppError, GeneratorConfig};

/// Load `osc-ubuntu.toml`.
///
/// An explicit `path` must exist. Without one, `osc-ubuntu.toml` in `dir` is
/// used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>, dir: &Path) -> Result<GeneratorConfig, AppError> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = config::paths::config(dir);
            if !candidate.exists() {
                debug!("no {} found; using defaults", config::paths::CONFIG_FILE_NAME);
                return Ok(GeneratorConfig::default());
            }
            candidate
        }
    };

    debug!(path = %config_path.display(), "loading generator config");
    let content = fs::read_to_string(&config_path)?;
    let mut config = parse_config_content(&content)?;

    // Template paths are relative to the config file.
    if let Some(template) = config.generator.template.take() {
        let base = config_path.parent().unwrap_or(Path::new("."));
        config.generator.template = Some(base.join(template));
    }

    Ok(config)
}
