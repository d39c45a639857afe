//! Git subprocess invocation

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Git subprocess runner bound to a repository directory.
///
/// All git access goes through the `git` binary; no repository state is
/// ever mutated (every invocation here is read-only).
pub struct GitRunner {
    repo_path: PathBuf,
}

impl GitRunner {
    /// Create a runner for the given repository directory
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Create a runner for the current directory
    pub fn current_dir() -> Self {
        Self {
            repo_path: PathBuf::from("."),
        }
    }

    /// Get the repository directory this runner operates in
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Run a git subcommand, capturing its output.
    ///
    /// A missing `git` binary maps to `Error::Invocation` instead of a raw
    /// I/O error so the user sees an actionable message.
    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::Invocation("git executable not found on PATH".to_string())
                } else {
                    Error::Invocation(format!("failed to run git: {}", e))
                }
            })
    }

    /// Check that the runner's directory is inside a git repository
    pub fn ensure_repository(&self) -> Result<()> {
        let output = self.run(&["rev-parse", "--git-dir"])?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::Invocation(format!(
                "not a git repository: {}",
                self.repo_path.display()
            )))
        }
    }

    /// Verify that a reference resolves to a commit.
    ///
    /// `^{commit}` peels tags, so annotated release tags validate the same
    /// way branches and raw SHAs do.
    pub fn verify_ref(&self, reference: &str) -> Result<()> {
        let revspec = format!("{}^{{commit}}", reference);
        let output = self.run(&["rev-parse", "--verify", "--quiet", &revspec])?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Error::Invocation(format!(
                "invalid git reference '{}' (make sure you are in the correct \
                 repository and the reference exists)",
                reference
            )))
        }
    }

    /// List the names of files differing between two references.
    ///
    /// Returns the raw NUL-separated output of
    /// `git diff --name-only -z <base> <head>`; see [`crate::git::diff`]
    /// for parsing. A non-zero exit surfaces git's stderr text.
    pub fn diff_name_only(&self, base: &str, head: &str) -> Result<Vec<u8>> {
        let output = self.run(&["diff", "--name-only", "-z", base, head])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Invocation(format!(
                "git diff --name-only {} {} failed: {}",
                base,
                head,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
