//! Container config descriptor (`config.json`)
//!
//! Describes the container's identity and process environment: which
//! platform it targets, where its root filesystem lives, what it runs and
//! where the virtual filesystems are mounted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Spec format version written to `schemaVersion`
pub const SCHEMA_VERSION: &str = "0.2.0";

/// Container config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    /// Spec format version
    pub schema_version: String,

    /// Platform the spec was generated on
    pub platform: Platform,

    /// Root filesystem
    pub root: Root,

    /// Container process
    pub process: Process,

    /// Container hostname
    pub hostname: String,

    /// Mount points, in mount order
    pub mounts: Vec<MountPoint>,

    /// Capabilities kept by the container process
    pub linux_capabilities: BTreeSet<String>,
}

impl ContainerConfig {
    /// Names of all mount points, in mount order
    pub fn mount_names(&self) -> impl Iterator<Item = &str> {
        self.mounts.iter().map(|m| m.name.as_str())
    }
}

/// Host operating system and CPU architecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Operating system name
    pub os: String,

    /// CPU architecture name
    pub arch: String,
}

/// Root filesystem configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Path to the root filesystem, relative to the bundle
    pub path: String,

    /// Whether the root filesystem is mounted read-only
    pub readonly: bool,
}

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Attach a terminal
    pub terminal: bool,

    /// User identity (empty: runtime default)
    pub user: User,

    /// Command line
    pub args: Vec<String>,

    /// Environment as `KEY=VALUE` entries
    pub env: Vec<String>,
}

/// User identity record; no fields are set by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {}

/// Named mount point; options live in the runtime spec under the same name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
    /// Mount name, key into [`ContainerRuntime::mounts`](crate::ContainerRuntime::mounts)
    pub name: String,

    /// Destination path inside the container
    pub path: String,
}

impl MountPoint {
    /// Create a mount point
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}
