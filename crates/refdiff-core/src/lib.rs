//! # refdiff Core
//!
//! Changed-file listing between two Git references.
//!
//! This library shells out to the `git` binary to enumerate the files that
//! differ between two references, with:
//! - **Subprocess-only git access** — no libgit2 bindings, no object-model
//!   parsing; git's own errors are surfaced to the caller
//! - **Precompiled glob filtering** via `globset`, applied to the final
//!   path segment of each changed file
//! - **Zero-copy parsing** of git's NUL-separated name list with `memchr`
//! - **Order preservation** — paths come back exactly as git reports them
//!
//! ## Example
//!
//! ```no_run
//! use refdiff_core::{list_changed_files, ListConfig, ReferencePair};
//! use std::borrow::Cow;
//!
//! # fn example() -> refdiff_core::Result<()> {
//! let mut config = ListConfig::new(ReferencePair::new("main", "feature")?);
//! config.pattern = Some(Cow::Borrowed("*.py"));
//!
//! let changed = list_changed_files(&config)?;
//! println!("Changed files: {}", changed.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod git;
pub mod output;
pub mod patterns;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use output::OutputWriter;
pub use patterns::PatternMatcher;
pub use types::{ChangedFileList, ListConfig, ReferencePair};

use git::GitRunner;

/// List the files that differ between two git references.
///
/// This is the main entry point for the library. It handles:
/// - Repository detection (`git rev-parse --git-dir`)
/// - Reference validation (`git rev-parse --verify`)
/// - Diff-name listing (`git diff --name-only -z`)
/// - Optional glob filtering of the final path segment
///
/// The returned list preserves git's reported order. An empty list is a
/// successful result, not an error.
///
/// # Example
///
/// ```no_run
/// use refdiff_core::{list_changed_files, ListConfig, ReferencePair};
///
/// # fn example() -> refdiff_core::Result<()> {
/// let config = ListConfig::new(ReferencePair::new("v1.0", "v2.0")?);
/// for path in list_changed_files(&config)?.iter() {
///     println!("{path}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_changed_files(config: &ListConfig<'_>) -> Result<ChangedFileList> {
    let runner = match &config.repo_path {
        Some(path) => GitRunner::new(path.as_ref()),
        None => GitRunner::current_dir(),
    };

    runner.ensure_repository()?;
    runner.verify_ref(&config.refs.base)?;
    runner.verify_ref(&config.refs.head)?;

    // Compile the pattern before spending time on the diff
    let matcher = PatternMatcher::new(config.pattern.as_deref())?;

    let raw = runner.diff_name_only(&config.refs.base, &config.refs.head)?;
    let paths = git::diff::parse_name_list(&raw)?;
    let filtered = matcher.filter(paths);

    Ok(ChangedFileList::new(
        filtered.into_iter().map(str::to_owned).collect(),
    ))
}
