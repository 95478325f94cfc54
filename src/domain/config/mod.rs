pub mod generator;
pub mod parse;
pub mod paths;

pub use generator::{CommandLineConfig, GeneratorConfig, PATH_PLACEHOLDER, RenderConfig};
pub use parse::parse_config_content;
