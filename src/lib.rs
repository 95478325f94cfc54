//! osc-ubuntu: Render Ubuntu cloud-init user data for Kubernetes worker nodes.
//!
//! The kubelet unit of every rendered config is guaranteed to start with the
//! flags in [`KUBELET_MANDATORY_FLAGS`], without overriding values already set.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::fs;
use std::path::Path;

use app::{
    commands::{generate, patch_unit},
    config::{load_config, load_operating_system_config},
};

pub use app::AppContext;
pub use domain::{
    AppError, CommandLineLayout, DropIn, File, GeneratorConfig, KUBELET_MANDATORY_FLAGS,
    KUBELET_SERVICE_UNIT_NAME, MandatoryFlag, OperatingSystemConfig, Unit, UnitOption,
    UnitParseError,
};
pub use ports::{CloudInitRenderer, RenderedCloudInit};
pub use services::MinijinjaCloudInitRenderer;

// =============================================================================
// Generate API
// =============================================================================

/// Render `config` with the embedded template and default settings.
///
/// The template is compiled on every call. Callers rendering many configs
/// should build an [`AppContext`] once and use [`generate_with`].
pub fn generate(config: &OperatingSystemConfig) -> Result<RenderedCloudInit, AppError> {
    let ctx = AppContext::from_config(&GeneratorConfig::default())?;
    generate::execute(&ctx, config)
}

/// Render `config` with a prepared context.
///
/// Build the context once and reuse it; it holds the compiled template.
pub fn generate_with<R: CloudInitRenderer>(
    ctx: &AppContext<R>,
    config: &OperatingSystemConfig,
) -> Result<RenderedCloudInit, AppError> {
    generate::execute(ctx, config)
}

/// Render the operating system config stored at `input`.
///
/// # Arguments
/// * `input` - YAML or JSON operating system config
/// * `config_path` - Explicit `osc-ubuntu.toml`; otherwise looked up in `dir`
/// * `dir` - Directory searched for `osc-ubuntu.toml`
pub fn generate_file_at(
    input: &Path,
    config_path: Option<&Path>,
    dir: &Path,
) -> Result<RenderedCloudInit, AppError> {
    let config = load_config(config_path, dir)?;
    // The template is compiled before any input is read.
    let ctx = AppContext::from_config(&config)?;
    let osc = load_operating_system_config(input)?;
    generate::execute(&ctx, &osc)
}

// =============================================================================
// Patch Unit API
// =============================================================================

/// Enforce the mandatory kubelet flags on unit-file text.
pub fn patch_unit(content: &str) -> Result<String, AppError> {
    patch_unit::execute(&CommandLineLayout::default(), KUBELET_SERVICE_UNIT_NAME, content)
}

/// Enforce the mandatory kubelet flags on the unit file at `unit`.
///
/// The file is not modified; the patched text is returned.
pub fn patch_unit_file_at(
    unit: &Path,
    config_path: Option<&Path>,
    dir: &Path,
) -> Result<String, AppError> {
    let config = load_config(config_path, dir)?;
    let content = fs::read_to_string(unit)?;
    let unit_name = unit
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| KUBELET_SERVICE_UNIT_NAME.to_string());
    patch_unit::execute(&config.command_line.layout(), &unit_name, &content)
}
