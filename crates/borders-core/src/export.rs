// crates/borders-core/src/export.rs
use crate::error::Result;
use crate::loader::create_output;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Layout of the emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indentation.
    Pretty,
    /// Single line, no extra whitespace.
    Compact,
}

// -----------------------------------------------------------------------------
// GENERIC WRITER
// -----------------------------------------------------------------------------

/// Writes ANY serializable value as JSON to `writer` and flushes it.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    style: JsonStyle,
) -> Result<()> {
    match style {
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
        JsonStyle::Compact => serde_json::to_writer(&mut writer, value)?,
    }
    writer.flush()?;
    Ok(())
}

/// Writes `value` to `path`, creating parent directories and replacing any
/// existing file.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T, style: JsonStyle) -> Result<()> {
    let writer = create_output(path)?;
    write_json(writer, value, style)
}
