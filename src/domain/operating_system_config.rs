//! Structured input of the generator.

use serde::{Deserialize, Serialize};

/// Name of the unit whose start command carries the mandatory kubelet flags.
pub const KUBELET_SERVICE_UNIT_NAME: &str = "kubelet.service";

/// Units and files to be placed on a new node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatingSystemConfig {
    /// Whether this config bootstraps a node. Only bootstrap configs write files.
    pub bootstrap: bool,
    /// Location of the rendered document on the node, if it is stored there.
    pub path: Option<String>,
    pub units: Vec<Unit>,
    pub files: Vec<File>,
}

impl OperatingSystemConfig {
    /// Find a unit by name.
    pub fn unit_with_name(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.name == name)
    }

    pub fn unit_with_name_mut(&mut self, name: &str) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.name == name)
    }
}

/// A systemd unit definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    /// Raw unit-file text.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub drop_ins: Vec<DropIn>,
}

impl Unit {
    pub fn new(name: impl Into<String>, content: Option<String>) -> Self {
        Self { name: name.into(), content, drop_ins: Vec::new() }
    }
}

/// A drop-in fragment placed in `<unit>.d/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropIn {
    pub name: String,
    pub content: String,
}

/// A plain file written to the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub path: String,
    pub content: String,
    /// Unix permission bits.
    #[serde(default)]
    pub permissions: Option<u32>,
}
