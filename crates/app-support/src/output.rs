//! The single line of program output.

use std::io::Write;

use crate::AppError;

/// Write `line` followed by a newline to `out` and flush it.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), AppError> {
    writeln!(out, "{line}")?;
    out.flush()?;
    tracing::debug!(bytes = line.len() + 1, "output line written");
    Ok(())
}
