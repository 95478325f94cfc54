//! Cloud-init rendering backed by a compiled Minijinja template.

use std::fs;

use base64::{Engine, engine::general_purpose::STANDARD};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, OperatingSystemConfig, RenderConfig};
use crate::ports::{CloudInitRenderer, RenderedCloudInit};

const TEMPLATE_NAME: &str = "cloud-init-ubuntu";

static CLOUD_INIT_UBUNTU_TEMPLATE: &str =
    include_str!("../assets/templates/cloud-init-ubuntu.template");

/// Renderer holding a template compiled once at construction.
///
/// The environment is never mutated after construction, so one renderer can
/// serve concurrent callers through a shared reference.
#[derive(Debug)]
pub struct MinijinjaCloudInitRenderer {
    env: Environment<'static>,
    render: RenderConfig,
}

impl MinijinjaCloudInitRenderer {
    /// Compile the template named by `render.template`, or the embedded one.
    pub fn new(render: RenderConfig) -> Result<Self, AppError> {
        match &render.template {
            Some(path) => {
                let source = fs::read_to_string(path).map_err(|err| AppError::TemplateLoad {
                    template: path.display().to_string(),
                    details: err.to_string(),
                })?;
                Self::from_source(render, source)
            }
            None => Self::from_source(render, CLOUD_INIT_UBUNTU_TEMPLATE.to_string()),
        }
    }

    /// Compile the embedded Ubuntu template.
    pub fn embedded(render: RenderConfig) -> Result<Self, AppError> {
        Self::from_source(render, CLOUD_INIT_UBUNTU_TEMPLATE.to_string())
    }

    /// Compile a template from source text.
    pub fn from_source(render: RenderConfig, source: String) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_template_owned(TEMPLATE_NAME, source).map_err(|err| AppError::TemplateLoad {
            template: TEMPLATE_NAME.to_string(),
            details: err.to_string(),
        })?;

        Ok(Self { env, render })
    }
}

impl CloudInitRenderer for MinijinjaCloudInitRenderer {
    fn render(&self, config: &OperatingSystemConfig) -> Result<RenderedCloudInit, AppError> {
        let data = TemplateData::new(config, &self.render);

        let document = self
            .env
            .get_template(TEMPLATE_NAME)
            .and_then(|template| template.render(&data))
            .map_err(|err| AppError::TemplateRender {
                template: TEMPLATE_NAME.to_string(),
                details: err.to_string(),
            })?;

        let command = config.path.as_deref().map(|path| self.render.command_for(path));

        Ok(RenderedCloudInit { document: document.into_bytes(), command })
    }
}

/// Values exposed to the template. Paths and commands are escaped for YAML
/// single quotes and contents are base64 encoded.
#[derive(Debug, Serialize)]
struct TemplateData {
    bootstrap: bool,
    files: Vec<TemplateFile>,
    units: Vec<TemplateUnit>,
}

#[derive(Debug, Serialize)]
struct TemplateFile {
    path: String,
    permissions: Option<String>,
    content: String,
}

#[derive(Debug, Serialize)]
struct TemplateUnit {
    /// Unescaped; templates must quote it themselves.
    name: String,
    start_command: String,
    path: String,
    content: Option<String>,
    drop_ins: Vec<TemplateDropIn>,
}

#[derive(Debug, Serialize)]
struct TemplateDropIn {
    path: String,
    content: String,
}

impl TemplateData {
    fn new(config: &OperatingSystemConfig, render: &RenderConfig) -> Self {
        let files = config
            .files
            .iter()
            .map(|file| TemplateFile {
                path: single_quoted(&file.path),
                permissions: file.permissions.map(|mode| format!("{:04o}", mode)),
                content: STANDARD.encode(&file.content),
            })
            .collect();

        let units = config
            .units
            .iter()
            .map(|unit| TemplateUnit {
                name: unit.name.clone(),
                start_command: single_quoted(&start_command(&unit.name)),
                path: single_quoted(&render.unit_path(&unit.name)),
                content: unit.content.as_ref().map(|content| STANDARD.encode(content)),
                drop_ins: unit
                    .drop_ins
                    .iter()
                    .map(|drop_in| TemplateDropIn {
                        path: single_quoted(&render.drop_in_path(&unit.name, &drop_in.name)),
                        content: STANDARD.encode(&drop_in.content),
                    })
                    .collect(),
            })
            .collect();

        Self { bootstrap: config.bootstrap, files, units }
    }
}

fn single_quoted(value: &str) -> String {
    value.replace('\'', "''")
}

/// `systemctl` line enabling and restarting `unit`, with the name shell quoted.
fn start_command(unit: &str) -> String {
    let quoted = format!("'{}'", unit.replace('\'', r"'\''"));
    format!("systemctl enable {quoted} && systemctl restart {quoted}")
}
