use crate::domain::{AppError, OperatingSystemConfig};

/// Output of a cloud-init rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCloudInit {
    /// The cloud-init user data document.
    pub document: Vec<u8>,
    /// Command that applies the document on the node, when it is stored there.
    pub command: Option<String>,
}

/// Port for rendering an operating system config into a cloud-init document.
pub trait CloudInitRenderer {
    /// Render the document. Implementations must not mutate shared state.
    fn render(&self, config: &OperatingSystemConfig) -> Result<RenderedCloudInit, AppError>;
}
