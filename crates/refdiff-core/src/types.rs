//! Core type definitions with zero-copy design

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A pair of git references delimiting the diff.
///
/// The only validation performed here is that a reference is non-empty and
/// does not start with `-` (so it can never be parsed by git as an option).
/// Whether the reference actually resolves is delegated to git itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePair<'a> {
    /// Base reference (tag, branch, or commit)
    pub base: Cow<'a, str>,
    /// Head reference (tag, branch, or commit)
    pub head: Cow<'a, str>,
}

impl<'a> ReferencePair<'a> {
    /// Create a reference pair, rejecting empty or option-like references
    pub fn new(base: impl Into<Cow<'a, str>>, head: impl Into<Cow<'a, str>>) -> Result<Self> {
        let base = base.into();
        let head = head.into();

        for reference in [&base, &head] {
            if reference.is_empty() {
                return Err(Error::Invocation("empty git reference".to_string()));
            }
            if reference.starts_with('-') {
                return Err(Error::Invocation(format!(
                    "invalid git reference '{}': may not start with '-'",
                    reference
                )));
            }
        }

        Ok(Self { base, head })
    }
}

/// Configuration input for a changed-file listing
#[derive(Debug, Clone)]
pub struct ListConfig<'a> {
    /// References to diff between
    pub refs: ReferencePair<'a>,
    /// Optional glob pattern applied to the final path segment
    pub pattern: Option<Cow<'a, str>>,
    /// Repository directory (default: current directory)
    pub repo_path: Option<Cow<'a, str>>,
}

impl<'a> ListConfig<'a> {
    /// Create a config for the given reference pair with no filtering
    pub fn new(refs: ReferencePair<'a>) -> Self {
        Self {
            refs,
            pattern: None,
            repo_path: None,
        }
    }
}

/// Ordered list of changed file paths, as reported by git after filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFileList {
    files: Vec<String>,
}

impl ChangedFileList {
    /// Wrap an already-ordered list of paths
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Number of changed files
    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when no files changed (success, not an error)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the paths in git's reported order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Borrow the underlying path list
    pub fn as_slice(&self) -> &[String] {
        &self.files
    }
}

impl IntoIterator for ChangedFileList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
