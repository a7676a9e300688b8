//! Host platform identification
//!
//! The generated config records the operating system and CPU architecture
//! it was produced on. Those two strings are the only non-literal inputs to
//! the spec builder, so they sit behind [`PlatformSource`]:
//! - [`HostPlatform`] - the values compiled into this binary
//! - [`FixedPlatform`] - caller-supplied values for tests

/// Source of the OS and architecture strings recorded in a spec
pub trait PlatformSource {
    /// Operating system name (e.g. `linux`)
    fn os(&self) -> &str;

    /// CPU architecture name (e.g. `x86_64`)
    fn arch(&self) -> &str;
}

/// Platform this binary was built for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPlatform;

impl HostPlatform {
    /// Create a host platform source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlatformSource for HostPlatform {
    fn os(&self) -> &str {
        std::env::consts::OS
    }

    fn arch(&self) -> &str {
        std::env::consts::ARCH
    }
}

/// Platform with explicitly provided values
///
/// # Example
/// ```
/// use specgen_core::{FixedPlatform, PlatformSource};
///
/// let platform = FixedPlatform::new("linux", "riscv64");
/// assert_eq!(platform.os(), "linux");
/// assert_eq!(platform.arch(), "riscv64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    os: String,
    arch: String,
}

impl FixedPlatform {
    /// Create a platform source returning `os` and `arch` verbatim
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }
}

impl PlatformSource for FixedPlatform {
    fn os(&self) -> &str {
        &self.os
    }

    fn arch(&self) -> &str {
        &self.arch
    }
}
