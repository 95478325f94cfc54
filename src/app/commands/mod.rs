pub mod generate;
pub mod patch_unit;
