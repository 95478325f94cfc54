//! Cloud-init generation with kubelet flag enforcement.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::unit_patch::ensure_exec_start_flags;
use crate::domain::{
    AppError, KUBELET_MANDATORY_FLAGS, KUBELET_SERVICE_UNIT_NAME, OperatingSystemConfig,
};
use crate::ports::{CloudInitRenderer, RenderedCloudInit};

/// Render `config`, making sure the kubelet starts with the mandatory flags.
///
/// The caller's config is left untouched: the kubelet unit is patched on a
/// copy which is then rendered. Without a kubelet unit, or without content
/// for it, the config is rendered as given.
pub fn execute<R: CloudInitRenderer>(
    ctx: &AppContext<R>,
    config: &OperatingSystemConfig,
) -> Result<RenderedCloudInit, AppError> {
    let Some(content) =
        config.unit_with_name(KUBELET_SERVICE_UNIT_NAME).and_then(|unit| unit.content.as_deref())
    else {
        info!(unit = KUBELET_SERVICE_UNIT_NAME, "unit has no content; rendering unchanged");
        return ctx.renderer().render(config);
    };

    let patched = ensure_exec_start_flags(content, KUBELET_MANDATORY_FLAGS, ctx.command_line())
        .map_err(|source| AppError::UnitContent {
            unit: KUBELET_SERVICE_UNIT_NAME.to_string(),
            source,
        })?;
    let changed = patched != content;
    debug!(unit = KUBELET_SERVICE_UNIT_NAME, changed, "patched unit content");

    let mut patched_config = config.clone();
    if let Some(unit) = patched_config.unit_with_name_mut(KUBELET_SERVICE_UNIT_NAME) {
        unit.content = Some(patched);
    }

    let rendered = ctx.renderer().render(&patched_config)?;
    info!(
        units = patched_config.units.len(),
        files = patched_config.files.len(),
        bytes = rendered.document.len(),
        "rendered cloud-init document"
    );
    Ok(rendered)
}
