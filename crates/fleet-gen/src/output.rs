//! Rendering of generated documents as indented JSON.

use std::io::Write;

use crate::errors::GenerateError;
use crate::models::BackendConfig;

/// Renders the whole document with two-space indentation.
pub fn to_pretty_json(config: &BackendConfig) -> Result<String, GenerateError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Renders the document in full, then writes it followed by a newline.
///
/// Nothing is written if rendering fails.
pub fn write_pretty_json(config: &BackendConfig, mut out: impl Write) -> Result<(), GenerateError> {
    let rendered = to_pretty_json(config)?;
    out.write_all(rendered.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
