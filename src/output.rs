//! Rendering a translation to a writer.

use std::io::Write;

use crate::config::{LineEnding, OutputFormat};
use crate::error::AppError;
use crate::translate::Translation;

/// Write `translation` in the requested format.
///
/// Text output terminates every statement with `line_ending` and writes
/// nothing for an empty translation. JSON output is one object followed by
/// a newline.
pub fn write_translation<W: Write>(
    out: &mut W,
    translation: &Translation,
    format: OutputFormat,
    line_ending: LineEnding,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for statement in &translation.statements {
                out.write_all(statement.as_bytes())?;
                out.write_all(line_ending.as_str().as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, translation)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
