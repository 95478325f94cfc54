use std::cell::RefCell;

use crate::domain::{AppError, OperatingSystemConfig};
use crate::ports::{CloudInitRenderer, RenderedCloudInit};

/// Renderer that records what it was asked to render.
///
/// The document lists every unit as `# <name>` followed by its content, which
/// keeps assertions on patched units readable.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockRenderer {
    pub rendered: RefCell<Vec<OperatingSystemConfig>>,
    pub should_fail: RefCell<bool>,
}

#[allow(dead_code)]
impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn last_rendered(&self) -> Option<OperatingSystemConfig> {
        self.rendered.borrow().last().cloned()
    }
}

impl CloudInitRenderer for MockRenderer {
    fn render(&self, config: &OperatingSystemConfig) -> Result<RenderedCloudInit, AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::TemplateRender {
                template: "mock".to_string(),
                details: "Mock renderer error".to_string(),
            });
        }
        self.rendered.borrow_mut().push(config.clone());

        let mut document = String::new();
        for unit in &config.units {
            document.push_str(&format!("# {}\n", unit.name));
            if let Some(content) = &unit.content {
                document.push_str(content);
            }
        }
        Ok(RenderedCloudInit { document: document.into_bytes(), command: config.path.clone() })
    }
}
