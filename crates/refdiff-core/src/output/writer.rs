//! File and stream output for changed-file lists

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Output writer for newline-separated path lists
pub struct OutputWriter;

impl OutputWriter {
    /// Write each path on its own line to `path`, overwriting any existing
    /// content. Parent directories are not created; a missing directory is
    /// a write error.
    pub fn write_lines<'a, I>(path: &Path, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        std::fs::write(path, content)
            .map_err(|e| Error::Write(format!("{}: {}", path.display(), e)))
    }

    /// Write each path on its own line to an arbitrary stream (the CLI
    /// passes a locked stdout here).
    pub fn print_lines<'a, W, I>(writer: &mut W, lines: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
