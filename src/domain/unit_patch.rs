//! Rewriting of a unit's `ExecStart` to carry mandatory flags.

use crate::domain::command_line::{self, CommandLineLayout};
use crate::domain::flags::{self, MandatoryFlag};
use crate::domain::unit_content::{self, UnitOption, UnitParseError};

pub const SERVICE_SECTION: &str = "Service";
pub const EXEC_START: &str = "ExecStart";

/// Ensure `flags` on the `[Service] ExecStart` of a unit and write it back.
///
/// The first non-empty `ExecStart` is patched; an empty `ExecStart=` only
/// resets earlier values and is left as is. Content without an `ExecStart`
/// is normalized by the round trip but otherwise unchanged.
pub fn ensure_exec_start_flags(
    content: &str,
    flags: &[MandatoryFlag],
    fallback: &CommandLineLayout,
) -> Result<String, UnitParseError> {
    let mut options = unit_content::deserialize(content)?;

    if let Some(exec_start) = exec_start_mut(&mut options) {
        let layout = CommandLineLayout::detect(&exec_start.value, fallback);
        let command = command_line::deserialize(&exec_start.value);
        let command = flags::ensure_flags(command, flags);
        exec_start.value = command_line::serialize_with_layout(&command, &layout);
    }

    Ok(unit_content::serialize(&options))
}

fn exec_start_mut(options: &mut [UnitOption]) -> Option<&mut UnitOption> {
    options.iter_mut().find(|option| {
        option.section == SERVICE_SECTION
            && option.name == EXEC_START
            && !option.value.trim().is_empty()
    })
}
