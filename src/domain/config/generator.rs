//! Generator configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::command_line::{CommandLineLayout, DEFAULT_CONTINUATION};

/// Placeholder substituted with the on-node document path in the invocation command.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Immutable settings shared by every generation, loaded from `osc-ubuntu.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Rendering settings.
    #[serde(default)]
    pub generator: RenderConfig,
    /// Layout used when an `ExecStart` value has to be wrapped.
    #[serde(default)]
    pub command_line: CommandLineConfig,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generator.validate()?;
        self.command_line.validate()?;
        Ok(())
    }
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory unit files are written to on the node.
    #[serde(default = "default_units_path")]
    pub units_path: String,
    /// Invocation command returned alongside the document.
    #[serde(default = "default_command")]
    pub command: String,
    /// Alternate template file. The embedded template is used when unset.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { units_path: default_units_path(), command: default_command(), template: None }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.units_path.trim().is_empty() {
            return Err(AppError::config_error("generator.units_path must not be empty"));
        }
        if !self.command.contains(PATH_PLACEHOLDER) {
            return Err(AppError::config_error(format!(
                "generator.command must contain the {} placeholder",
                PATH_PLACEHOLDER
            )));
        }
        Ok(())
    }

    /// Path of a unit file on the node.
    pub fn unit_path(&self, unit_name: &str) -> String {
        format!("{}/{}", self.units_path.trim_end_matches('/'), unit_name)
    }

    /// Path of a drop-in file on the node.
    pub fn drop_in_path(&self, unit_name: &str, drop_in_name: &str) -> String {
        format!("{}/{}.d/{}", self.units_path.trim_end_matches('/'), unit_name, drop_in_name)
    }

    /// Invocation command for a document stored at `path`.
    pub fn command_for(&self, path: &str) -> String {
        self.command.replace(PATH_PLACEHOLDER, path)
    }
}

/// Fallback layout for wrapped command lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandLineConfig {
    /// Tokens per physical line when a wrapped value's first line has none to
    /// measure. Values written on one line stay on one line.
    #[serde(default = "default_wrap_every")]
    pub wrap_every: usize,
    /// Separator between physical lines.
    #[serde(default = "default_continuation")]
    pub continuation: String,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self { wrap_every: default_wrap_every(), continuation: default_continuation() }
    }
}

impl CommandLineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.wrap_every == 0 {
            return Err(AppError::config_error("command_line.wrap_every must be greater than 0"));
        }
        if !self.continuation.contains("\\\n") {
            return Err(AppError::config_error(
                "command_line.continuation must contain a backslash followed by a newline",
            ));
        }
        Ok(())
    }

    pub fn layout(&self) -> CommandLineLayout {
        CommandLineLayout { wrap_every: self.wrap_every, continuation: self.continuation.clone() }
    }
}

fn default_units_path() -> String {
    "/etc/systemd/system".to_string()
}

fn default_command() -> String {
    format!("/usr/bin/cloud-init clean && /usr/bin/cloud-init --file {} init", PATH_PLACEHOLDER)
}

fn default_wrap_every() -> usize {
    1
}

fn default_continuation() -> String {
    DEFAULT_CONTINUATION.to_string()
}
