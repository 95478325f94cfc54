//! Flag enforcement on a single kubelet unit file.

use tracing::debug;

use crate::domain::unit_patch::ensure_exec_start_flags;
use crate::domain::{AppError, CommandLineLayout, KUBELET_MANDATORY_FLAGS};

/// Return `content` with the mandatory kubelet flags on its `ExecStart`.
///
/// `unit_name` only labels errors.
pub fn execute(
    layout: &CommandLineLayout,
    unit_name: &str,
    content: &str,
) -> Result<String, AppError> {
    let patched = ensure_exec_start_flags(content, KUBELET_MANDATORY_FLAGS, layout)
        .map_err(|source| AppError::UnitContent { unit: unit_name.to_string(), source })?;
    debug!(unit = unit_name, "patched unit file");
    Ok(patched)
}
