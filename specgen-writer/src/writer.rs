//! Refuse-to-overwrite file writer

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use specgen_core::{Error, Result};
use specgen_spec::SpecBundle;
use tracing::{debug, info};

use crate::render::RenderedFile;

/// File name of the container config
pub const CONFIG_FILE: &str = "config.json";

/// File name of the container runtime spec
pub const RUNTIME_FILE: &str = "runtime.json";

/// Permission bits requested for new files (before umask)
pub const FILE_MODE: u32 = 0o666;

/// Writes new files into a directory, never replacing existing ones
///
/// # Example
/// ```no_run
/// use specgen_core::HostPlatform;
/// use specgen_writer::SafeWriter;
///
/// let bundle = specgen_spec::build(&HostPlatform::new());
/// SafeWriter::current_dir().write_bundle(&bundle).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeWriter {
    dir: PathBuf,
}

impl SafeWriter {
    /// Create a writer targeting `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a writer targeting the process working directory
    ///
    /// Target paths stay relative, so errors name the bare file name.
    #[must_use]
    pub fn current_dir() -> Self {
        Self::new(PathBuf::new())
    }

    /// Directory files are written into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the target `name`
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Verify that `name` does not exist
    ///
    /// A dangling symlink counts as existing.
    ///
    /// # Errors
    /// - [`Error::AlreadyExists`] if anything is present at the path
    /// - [`Error::Io`] if the path cannot be inspected
    pub fn ensure_absent(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);

        match fs::symlink_metadata(&path) {
            Ok(_) => Err(Error::already_exists(path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} is absent", path.display());
                Ok(())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Write `bytes` to a new file `name`
    ///
    /// # Errors
    /// - [`Error::AlreadyExists`] if the file appeared since it was checked
    /// - [`Error::Io`] on any other filesystem failure
    pub fn write_new(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(name);

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                Error::already_exists(&path)
            } else {
                Error::io(&path, e)
            }
        })?;

        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| Error::io(&path, e))?;

        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write every file, checking that none exists before writing any
    ///
    /// Files are written in order. If a later write fails, earlier files
    /// stay on disk.
    ///
    /// # Errors
    /// Returns the first existence or I/O failure.
    pub fn write_all(&self, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
        for file in files {
            self.ensure_absent(file.name())?;
        }

        files
            .iter()
            .map(|file| self.write_new(file.name(), file.bytes()))
            .collect()
    }

    /// Write `config.json` and `runtime.json` for `bundle`
    ///
    /// # Errors
    /// Returns an error if either target exists, serialization fails or a
    /// write fails.
    pub fn write_bundle(&self, bundle: &SpecBundle) -> Result<Vec<PathBuf>> {
        self.ensure_absent(CONFIG_FILE)?;
        self.ensure_absent(RUNTIME_FILE)?;

        let files = [
            RenderedFile::new(CONFIG_FILE, &bundle.config)?,
            RenderedFile::new(RUNTIME_FILE, &bundle.runtime)?,
        ];

        self.write_all(&files)
    }
}
