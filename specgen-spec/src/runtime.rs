//! Container runtime descriptor (`runtime.json`)
//!
//! Low-level, kernel-facing settings applied when the container starts:
//! mount options, namespaces, rlimits, the device allowlist, memory
//! tuning and the seccomp policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Container runtime spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRuntime {
    /// Mount options keyed by mount name
    pub mounts: BTreeMap<String, MountOptions>,

    /// Namespaces to create, in order
    pub namespaces: Vec<NamespaceType>,

    /// Process resource limits
    pub resource_limits: Vec<Rlimit>,

    /// Device nodes created in the container
    pub devices: Vec<Device>,

    /// Resource tuning
    pub resources: Resources,

    /// Syscall filtering policy
    pub seccomp: Seccomp,
}

/// How a named mount point is mounted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOptions {
    /// Filesystem type
    #[serde(rename = "type")]
    pub fs_type: String,

    /// Mount source
    pub source: String,

    /// Mount flags; `None` serializes as `null`
    pub options: Option<Vec<String>>,
}

impl MountOptions {
    /// Create mount options from a type, source and flag list
    #[must_use]
    pub fn new(fs_type: &str, source: &str, options: Option<&[&str]>) -> Self {
        Self {
            fs_type: fs_type.to_string(),
            source: source.to_string(),
            options: options.map(|opts| opts.iter().map(ToString::to_string).collect()),
        }
    }
}

/// Namespace kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceType {
    /// PID namespace
    Pid,
    /// Network namespace
    Network,
    /// IPC namespace
    Ipc,
    /// UTS namespace (hostname)
    Uts,
    /// Mount namespace
    Mount,
}

/// Resource limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rlimit {
    /// Limit type (e.g. `RLIMIT_NOFILE`)
    #[serde(rename = "type")]
    pub limit_type: String,

    /// Hard limit
    pub hard: u64,

    /// Soft limit
    pub soft: u64,
}

/// Device node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Character device
    #[serde(rename = "c")]
    Char,
    /// Block device
    #[serde(rename = "b")]
    Block,
}

/// Device node in the allowlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device kind
    pub kind: DeviceKind,

    /// Path inside the container
    pub path: String,

    /// Major number
    pub major_number: i64,

    /// Minor number
    pub minor_number: i64,

    /// Cgroup access string (`r`, `w`, `m`)
    pub permissions: String,

    /// File mode bits of the node
    pub file_mode: u32,

    /// Owner UID
    #[serde(rename = "ownerUID")]
    pub owner_uid: u32,

    /// Owner GID
    #[serde(rename = "ownerGID")]
    pub owner_gid: u32,
}

/// Resource tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Memory settings
    pub memory: Memory,
}

/// Memory settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    /// Swappiness; [`Memory::SWAPPINESS_UNSET`] leaves the kernel default
    pub swappiness: i64,
}

impl Memory {
    /// Sentinel for "do not set swappiness"
    pub const SWAPPINESS_UNSET: i64 = -1;

    /// Whether swappiness is left to the kernel
    #[must_use]
    pub const fn swappiness_is_unset(&self) -> bool {
        self.swappiness == Self::SWAPPINESS_UNSET
    }
}

/// Seccomp policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seccomp {
    /// Action for syscalls not matched by any rule
    pub default_action: SeccompAction,

    /// Per-syscall rules
    pub syscalls: Vec<SyscallRule>,
}

/// Seccomp action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeccompAction {
    /// Kill the process
    ScmpActKill,
    /// Send SIGSYS
    ScmpActTrap,
    /// Return an error
    ScmpActErrno,
    /// Notify a tracer
    ScmpActTrace,
    /// Allow the syscall
    ScmpActAllow,
}

/// Seccomp rule for a single syscall
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyscallRule {
    /// Syscall name
    pub name: String,

    /// Action taken when the syscall is made
    pub action: SeccompAction,
}
