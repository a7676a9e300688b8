use std::collections::{BTreeSet, HashSet};

use serde_json::{Value, json};
use specgen_core::{FixedPlatform, HostPlatform};
use specgen_spec::*;

const MOUNT_NAMES: [&str; 7] = ["proc", "dev", "devpts", "shm", "mqueue", "sysfs", "cgroup"];

fn linux_bundle() -> SpecBundle {
    build(&FixedPlatform::new("linux", "x86_64"))
}

#[test]
fn test_config_fixed_values() {
    let config = linux_bundle().config;

    assert_eq!(config.schema_version, SCHEMA_VERSION);
    assert_eq!(config.root.path, "rootfs");
    assert!(config.root.readonly);
    assert!(config.process.terminal);
    assert_eq!(config.process.args, vec!["sh"]);
    assert_eq!(
        config.process.env,
        vec![
            "PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin",
            "TERM=xterm",
        ]
    );
    assert_eq!(config.hostname, "shell");

    let caps: BTreeSet<&str> = config.linux_capabilities.iter().map(String::as_str).collect();
    assert_eq!(caps, BTreeSet::from(["AUDIT_WRITE", "KILL", "NET_BIND_SERVICE"]));
}

#[test]
fn test_mount_order() {
    let config = linux_bundle().config;
    let names: Vec<&str> = config.mount_names().collect();
    assert_eq!(names, MOUNT_NAMES);

    let paths: Vec<&str> = config.mounts.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "/proc",
            "/dev",
            "/dev/pts",
            "/dev/shm",
            "/dev/mqueue",
            "/sys",
            "/sys/fs/cgroup"
        ]
    );
}

#[test]
fn test_runtime_mount_keys_match_config() {
    let bundle = linux_bundle();

    let keys: HashSet<&str> = bundle.runtime.mounts.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(MOUNT_NAMES));
    assert!(bundle.unmatched_mounts().is_empty());
}

#[test]
fn test_runtime_mount_options() {
    let mounts = linux_bundle().runtime.mounts;

    assert_eq!(mounts["dev"].fs_type, "tmpfs");
    assert_eq!(mounts["dev"].source, "tmpfs");
    assert_eq!(mounts["shm"].fs_type, "tmpfs");
    assert_eq!(mounts["shm"].source, "shm");
    assert_eq!(
        mounts["devpts"].options.as_deref(),
        Some(
            &[
                "nosuid".to_string(),
                "noexec".to_string(),
                "newinstance".to_string(),
                "ptmxmode=0666".to_string(),
                "mode=0620".to_string(),
                "gid=5".to_string(),
            ][..]
        )
    );
    assert!(mounts["proc"].options.is_none());
}

#[test]
fn test_namespaces_and_rlimits() {
    let runtime = linux_bundle().runtime;

    assert_eq!(
        runtime.namespaces,
        vec![
            NamespaceType::Pid,
            NamespaceType::Network,
            NamespaceType::Ipc,
            NamespaceType::Uts,
            NamespaceType::Mount,
        ]
    );

    assert_eq!(runtime.resource_limits.len(), 1);
    assert_eq!(
        runtime.resource_limits[0],
        Rlimit {
            limit_type: "RLIMIT_NOFILE".to_string(),
            hard: 1024,
            soft: 1024,
        }
    );
}

#[test]
fn test_device_table() {
    let devices = linux_bundle().runtime.devices;
    assert_eq!(devices.len(), 6);

    let paths: HashSet<&str> = devices.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths.len(), 6, "duplicate device paths");
    assert_eq!(
        paths,
        HashSet::from([
            "/dev/null",
            "/dev/random",
            "/dev/full",
            "/dev/tty",
            "/dev/zero",
            "/dev/urandom"
        ])
    );

    for dev in &devices {
        assert_eq!(dev.kind, DeviceKind::Char);
        assert_eq!(dev.permissions, "rwm");
        assert_eq!(dev.file_mode, 0o666);
        assert_eq!(dev.owner_uid, 0);
        assert_eq!(dev.owner_gid, 0);
    }

    let tty = devices.iter().find(|d| d.path == "/dev/tty").unwrap();
    assert_eq!((tty.major_number, tty.minor_number), (5, 0));
}

#[test]
fn test_resources_and_seccomp() {
    let runtime = linux_bundle().runtime;

    assert!(runtime.resources.memory.swappiness_is_unset());
    assert_eq!(runtime.seccomp.default_action, SeccompAction::ScmpActAllow);
    assert!(runtime.seccomp.syscalls.is_empty());
}

#[test]
fn test_host_platform_is_recorded() {
    let bundle = build(&HostPlatform::new());
    assert_eq!(bundle.config.platform.os, std::env::consts::OS);
    assert_eq!(bundle.config.platform.arch, std::env::consts::ARCH);
}

#[test]
fn test_config_json_shape() {
    let value = serde_json::to_value(linux_bundle().config).unwrap();

    assert_eq!(value["platform"], json!({"os": "linux", "arch": "x86_64"}));
    assert_eq!(value["root"], json!({"path": "rootfs", "readonly": true}));
    assert_eq!(value["process"]["user"], json!({}));
    assert_eq!(
        value["linuxCapabilities"],
        json!(["AUDIT_WRITE", "KILL", "NET_BIND_SERVICE"])
    );
}

#[test]
fn test_runtime_json_shape() {
    let value = serde_json::to_value(linux_bundle().runtime).unwrap();

    assert_eq!(
        value["resourceLimits"][0],
        json!({"type": "RLIMIT_NOFILE", "hard": 1024, "soft": 1024})
    );
    assert_eq!(value["resources"], json!({"memory": {"swappiness": -1}}));
    assert_eq!(
        value["seccomp"],
        json!({"defaultAction": "SCMP_ACT_ALLOW", "syscalls": []})
    );
    assert_eq!(value["mounts"]["proc"]["options"], Value::Null);
    assert_eq!(
        value["devices"][0],
        json!({
            "kind": "c",
            "path": "/dev/null",
            "majorNumber": 1,
            "minorNumber": 3,
            "permissions": "rwm",
            "fileMode": 438,
            "ownerUID": 0,
            "ownerGID": 0
        })
    );
}

#[test]
fn test_round_trip_preserves_bundle() {
    let bundle = linux_bundle();

    let config: ContainerConfig =
        serde_json::from_str(&serde_json::to_string(&bundle.config).unwrap()).unwrap();
    let runtime: ContainerRuntime =
        serde_json::from_str(&serde_json::to_string(&bundle.runtime).unwrap()).unwrap();

    assert_eq!(SpecBundle { config, runtime }, bundle);
}
