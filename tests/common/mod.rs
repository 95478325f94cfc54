//! Shared testing utilities for osc-ubuntu CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Kubelet unit as written by the base template: one argument per line.
#[allow(dead_code)]
pub const KUBELET_UNIT: &str = "[Unit]
Description=kubelet daemon
Documentation=https://kubernetes.io/docs/admin/kubelet
After=docker.service

[Install]
WantedBy=multi-user.target

[Service]
Restart=always
RestartSec=5
EnvironmentFile=/etc/environment
ExecStartPre=/bin/mkdir -p /var/lib/kubelet
ExecStart=/opt/bin/kubelet \\
    --bootstrap-kubeconfig=/var/lib/kubelet/kubeconfig-bootstrap \\
    --config=/var/lib/kubelet/config/kubelet \\
    --kubeconfig=/var/lib/kubelet/kubeconfig-real \\
    --v=2
";

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `osc-ubuntu` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("osc-ubuntu").expect("Failed to locate osc-ubuntu binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write an operating system config containing the given kubelet unit content.
    pub fn write_osc(&self, kubelet_content: Option<&str>) -> PathBuf {
        let mut yaml = String::from(
            "bootstrap: true\npath: /var/lib/cloud-config-downloader/downloads/cloud_config\nunits:\n  - name: docker.service\n",
        );
        if let Some(content) = kubelet_content {
            yaml.push_str("  - name: kubelet.service\n    content: |\n");
            for line in content.lines() {
                yaml.push_str("      ");
                yaml.push_str(line);
                yaml.push('\n');
            }
        }
        yaml.push_str("files:\n  - path: /etc/hostname\n    content: node-1\n    permissions: 420\n");
        self.write("osc.yaml", &yaml)
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Absolute path to the temp root, outside the work directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Decode the content of the `write_files` entry at `path` in a rendered document.
#[allow(dead_code)]
pub fn written_file(document: &str, path: &str) -> Option<String> {
    use base64::Engine;

    let yaml: serde_yaml::Value = serde_yaml::from_str(document).expect("document is YAML");
    let entry = yaml["write_files"]
        .as_sequence()?
        .iter()
        .find(|entry| entry["path"].as_str() == Some(path))?;
    let encoded = entry["content"].as_str()?.trim();
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded).expect("base64 content");
    Some(String::from_utf8(bytes).expect("utf-8 content"))
}
