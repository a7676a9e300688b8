//! Specgen Core - error type and host platform abstraction
//!
//! This crate provides the pieces shared by the spec builder, the writer
//! and the CLI.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod platform;

pub use error::{Error, Result};
pub use platform::{FixedPlatform, HostPlatform, PlatformSource};
