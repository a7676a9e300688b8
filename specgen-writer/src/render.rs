//! JSON rendering with tab indentation

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use specgen_core::Result;

/// Render `value` as tab-indented JSON with a trailing newline
///
/// Keys appear in field declaration order.
///
/// # Errors
/// Returns [`specgen_core::Error::Serialization`] if `value` cannot be
/// represented as JSON.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Serialized document paired with its target file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    name: String,
    bytes: Vec<u8>,
}

impl RenderedFile {
    /// Render `value` for the file `name`
    ///
    /// # Errors
    /// Returns an error if `value` cannot be serialized.
    pub fn new<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            bytes: render(value)?,
        })
    }

    /// Target file name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialized contents
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
