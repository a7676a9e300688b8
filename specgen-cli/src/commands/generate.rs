//! Generate command implementation

use anyhow::{Context, Result};
use specgen_core::{HostPlatform, PlatformSource};
use specgen_writer::SafeWriter;
use tracing::{debug, warn};

/// Write `config.json` and `runtime.json` into the working directory
pub fn execute() -> Result<()> {
    let platform = HostPlatform::new();
    debug!("Host platform: {}/{}", platform.os(), platform.arch());

    let bundle = specgen_spec::build(&platform);

    let unmatched = bundle.unmatched_mounts();
    if !unmatched.is_empty() {
        warn!("Mounts without a config/runtime counterpart: {:?}", unmatched);
    }

    let written = SafeWriter::current_dir()
        .write_bundle(&bundle)
        .context("Failed to generate spec")?;

    debug!("Generated {} file(s)", written.len());
    Ok(())
}
