//! Default spec pair for a minimal shell container
//!
//! Every value here is a literal except the platform strings, which come
//! from a [`PlatformSource`]. Container runtimes consuming the output
//! expect exactly this structure.
//!
//! Seccomp is left at allow-all: no syscall is filtered. This is a known
//! weak default.

use std::collections::{BTreeMap, BTreeSet};

use specgen_core::PlatformSource;
use tracing::debug;

use crate::config::{
    ContainerConfig, MountPoint, Platform, Process, Root, SCHEMA_VERSION, User,
};
use crate::runtime::{
    ContainerRuntime, Device, DeviceKind, Memory, MountOptions, NamespaceType, Resources, Rlimit,
    Seccomp, SeccompAction,
};

/// Root filesystem path, relative to the bundle
pub const ROOTFS_PATH: &str = "rootfs";

/// Container hostname
pub const HOSTNAME: &str = "shell";

/// Default `PATH`
pub const DEFAULT_PATH: &str = "PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin";

/// Default `TERM`
pub const DEFAULT_TERM: &str = "TERM=xterm";

/// Mount points as `(name, destination)`, in mount order
pub const MOUNT_POINTS: [(&str, &str); 7] = [
    ("proc", "/proc"),
    ("dev", "/dev"),
    ("devpts", "/dev/pts"),
    ("shm", "/dev/shm"),
    ("mqueue", "/dev/mqueue"),
    ("sysfs", "/sys"),
    ("cgroup", "/sys/fs/cgroup"),
];

/// Capabilities kept by the container process
pub const CAPABILITIES: [&str; 3] = ["AUDIT_WRITE", "KILL", "NET_BIND_SERVICE"];

/// Namespaces unshared at start
pub const NAMESPACES: [NamespaceType; 5] = [
    NamespaceType::Pid,
    NamespaceType::Network,
    NamespaceType::Ipc,
    NamespaceType::Uts,
    NamespaceType::Mount,
];

/// Open file descriptor ceiling (hard and soft)
pub const NOFILE_LIMIT: u64 = 1024;

/// Allowed character devices as `(path, major, minor)`
pub const DEVICES: [(&str, i64, i64); 6] = [
    ("/dev/null", 1, 3),
    ("/dev/random", 1, 8),
    ("/dev/full", 1, 7),
    ("/dev/tty", 5, 0),
    ("/dev/zero", 1, 5),
    ("/dev/urandom", 1, 9),
];

const DEVICE_PERMISSIONS: &str = "rwm";
const DEVICE_FILE_MODE: u32 = 0o666;

/// Config and runtime specs generated together
///
/// The two halves are only meaningful as a pair: each mount point named in
/// the config must have options in the runtime spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBundle {
    /// Contents of `config.json`
    pub config: ContainerConfig,

    /// Contents of `runtime.json`
    pub runtime: ContainerRuntime,
}

impl SpecBundle {
    /// Mount names present in only one of the two specs
    #[must_use]
    pub fn unmatched_mounts(&self) -> Vec<&str> {
        let named: BTreeSet<&str> = self.config.mount_names().collect();
        let configured: BTreeSet<&str> = self.runtime.mounts.keys().map(String::as_str).collect();

        named.symmetric_difference(&configured).copied().collect()
    }
}

/// Build the default spec pair for `platform`
#[must_use]
pub fn build(platform: &impl PlatformSource) -> SpecBundle {
    debug!(os = platform.os(), arch = platform.arch(), "Building default spec");

    SpecBundle {
        config: default_config(platform),
        runtime: default_runtime(),
    }
}

fn default_config(platform: &impl PlatformSource) -> ContainerConfig {
    ContainerConfig {
        schema_version: SCHEMA_VERSION.to_string(),
        platform: Platform {
            os: platform.os().to_string(),
            arch: platform.arch().to_string(),
        },
        root: Root {
            path: ROOTFS_PATH.to_string(),
            readonly: true,
        },
        process: Process {
            terminal: true,
            user: User::default(),
            args: vec!["sh".to_string()],
            env: vec![DEFAULT_PATH.to_string(), DEFAULT_TERM.to_string()],
        },
        hostname: HOSTNAME.to_string(),
        mounts: MOUNT_POINTS
            .iter()
            .map(|(name, path)| MountPoint::new(*name, *path))
            .collect(),
        linux_capabilities: CAPABILITIES.iter().map(ToString::to_string).collect(),
    }
}

fn default_runtime() -> ContainerRuntime {
    ContainerRuntime {
        mounts: default_mount_options(),
        namespaces: NAMESPACES.to_vec(),
        resource_limits: vec![Rlimit {
            limit_type: "RLIMIT_NOFILE".to_string(),
            hard: NOFILE_LIMIT,
            soft: NOFILE_LIMIT,
        }],
        devices: DEVICES
            .iter()
            .map(|&(path, major, minor)| Device {
                kind: DeviceKind::Char,
                path: path.to_string(),
                major_number: major,
                minor_number: minor,
                permissions: DEVICE_PERMISSIONS.to_string(),
                file_mode: DEVICE_FILE_MODE,
                owner_uid: 0,
                owner_gid: 0,
            })
            .collect(),
        resources: Resources {
            memory: Memory {
                swappiness: Memory::SWAPPINESS_UNSET,
            },
        },
        seccomp: Seccomp {
            default_action: SeccompAction::ScmpActAllow,
            syscalls: Vec::new(),
        },
    }
}

fn default_mount_options() -> BTreeMap<String, MountOptions> {
    let table = [
        ("proc", MountOptions::new("proc", "proc", None)),
        (
            "dev",
            MountOptions::new(
                "tmpfs",
                "tmpfs",
                Some(&["nosuid", "strictatime", "mode=755", "size=65536k"]),
            ),
        ),
        (
            "devpts",
            MountOptions::new(
                "devpts",
                "devpts",
                Some(&[
                    "nosuid",
                    "noexec",
                    "newinstance",
                    "ptmxmode=0666",
                    "mode=0620",
                    "gid=5",
                ]),
            ),
        ),
        (
            "shm",
            MountOptions::new(
                "tmpfs",
                "shm",
                Some(&["nosuid", "noexec", "nodev", "mode=1777", "size=65536k"]),
            ),
        ),
        (
            "mqueue",
            MountOptions::new("mqueue", "mqueue", Some(&["nosuid", "noexec", "nodev"])),
        ),
        (
            "sysfs",
            MountOptions::new("sysfs", "sysfs", Some(&["nosuid", "noexec", "nodev"])),
        ),
        (
            "cgroup",
            MountOptions::new(
                "cgroup",
                "cgroup",
                Some(&["nosuid", "noexec", "nodev", "relatime", "ro"]),
            ),
        ),
    ];

    table
        .into_iter()
        .map(|(name, opts)| (name.to_string(), opts))
        .collect()
}
