//! Git diff-name-list parsing with zero-copy

use memchr::memchr;

use crate::error::{Error, Result};

/// Parse the NUL-separated output of `git diff --name-only -z`.
///
/// Returns the paths in git's reported order, borrowing from the captured
/// output buffer. A trailing NUL (git always emits one after the last path)
/// and completely empty output are both handled.
pub fn parse_name_list(output: &[u8]) -> Result<Vec<&str>> {
    let mut paths = Vec::new();
    let mut rest = output;

    loop {
        let (field, remainder) = match memchr(b'\0', rest) {
            Some(pos) => (&rest[..pos], &rest[pos + 1..]),
            None => (rest, &[][..]),
        };

        if !field.is_empty() {
            let path = std::str::from_utf8(field).map_err(|_| {
                Error::Invocation(format!(
                    "git reported a non-UTF-8 path: {}",
                    String::from_utf8_lossy(field)
                ))
            })?;
            paths.push(path);
        }

        if remainder.is_empty() {
            break;
        }
        rest = remainder;
    }

    Ok(paths)
}
