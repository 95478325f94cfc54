use std::path::{Path, PathBuf};

/// File name of the optional generator configuration.
pub const CONFIG_FILE_NAME: &str = "osc-ubuntu.toml";

/// `<dir>/osc-ubuntu.toml`
pub fn config(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
