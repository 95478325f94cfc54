use crate::domain::{AppError, CommandLineLayout, GeneratorConfig};
use crate::ports::CloudInitRenderer;
use crate::services::MinijinjaCloudInitRenderer;

/// Application context holding the immutable state every generation shares.
pub struct AppContext<R: CloudInitRenderer> {
    renderer: R,
    command_line: CommandLineLayout,
}

impl<R: CloudInitRenderer> AppContext<R> {
    /// Create a new application context.
    pub fn new(renderer: R, command_line: CommandLineLayout) -> Self {
        Self { renderer, command_line }
    }

    /// Get a reference to the cloud-init renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Layout used for wrapped command lines whose own layout cannot be read.
    pub fn command_line(&self) -> &CommandLineLayout {
        &self.command_line
    }
}

impl AppContext<MinijinjaCloudInitRenderer> {
    /// Build a context from validated configuration, compiling the template.
    ///
    /// Fails with [`AppError::TemplateLoad`] when the template cannot be used.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, AppError> {
        config.validate()?;
        let renderer = MinijinjaCloudInitRenderer::new(config.generator.clone())?;
        Ok(Self::new(renderer, config.command_line.layout()))
    }
}
