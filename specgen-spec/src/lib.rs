//! Container spec model and defaults
//!
//! This crate defines the two documents emitted by specgen:
//! - [`ContainerConfig`] - platform, root filesystem, process and mount points
//! - [`ContainerRuntime`] - mount options, namespaces, devices and seccomp
//!
//! [`build`] fills both with the default minimal shell container.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod defaults;
pub mod runtime;

pub use config::{ContainerConfig, MountPoint, Platform, Process, Root, SCHEMA_VERSION, User};
pub use defaults::{SpecBundle, build};
pub use runtime::{
    ContainerRuntime, Device, DeviceKind, Memory, MountOptions, NamespaceType, Resources, Rlimit,
    Seccomp, SeccompAction, SyscallRule,
};
