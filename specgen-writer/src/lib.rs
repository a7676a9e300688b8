//! Safe output of generated specs
//!
//! Writes JSON documents into a directory without ever replacing an
//! existing file. All targets are checked before the first one is written.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod render;
pub mod writer;

pub use render::{RenderedFile, render};
pub use writer::{CONFIG_FILE, FILE_MODE, RUNTIME_FILE, SafeWriter};
