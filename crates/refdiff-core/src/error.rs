//! Error types for refdiff-core

use std::fmt;

/// Result type alias for refdiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for refdiff operations
#[derive(Debug)]
pub enum Error {
    /// Git invocation error (binary missing, not a repository, bad
    /// reference, or non-zero diff exit)
    Invocation(String),

    /// Output file cannot be created or written
    Write(String),

    /// Pattern compilation error
    Pattern(String),

    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invocation(msg) => write!(f, "git error: {}", msg),
            Error::Write(msg) => write!(f, "write error: {}", msg),
            Error::Pattern(msg) => write!(f, "pattern error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<globset::Error> for Error {
    fn from(err: globset::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Git invocation error
    Invocation,
    /// Output write error
    Write,
    /// Pattern compilation error
    Pattern,
    /// I/O operation error
    Io,
}

impl Error {
    /// Get the error kind — zero allocation, returns a Copy enum.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Invocation(_) => ErrorKind::Invocation,
            Error::Write(_) => ErrorKind::Write,
            Error::Pattern(_) => ErrorKind::Pattern,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Borrow the error message — zero allocation.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Invocation(msg) | Error::Write(msg) | Error::Pattern(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}
