pub mod command_line;
pub mod config;
pub mod error;
pub mod flags;
pub mod operating_system_config;
pub mod unit_content;
pub mod unit_patch;

pub use command_line::CommandLineLayout;
pub use config::{CommandLineConfig, GeneratorConfig, RenderConfig};
pub use error::AppError;
pub use flags::{KUBELET_MANDATORY_FLAGS, MandatoryFlag};
pub use operating_system_config::{
    DropIn, File, KUBELET_SERVICE_UNIT_NAME, OperatingSystemConfig, Unit,
};
pub use unit_content::{UnitOption, UnitParseError};
