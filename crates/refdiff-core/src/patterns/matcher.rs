//! Glob filtering of changed-file paths

use globset::{Glob, GlobMatcher};

use crate::error::Result;

/// Filter with a precompiled glob pattern.
///
/// The pattern applies to the final path segment only (`*.py` matches both
/// `a.py` and `src/b.py`), case-sensitively. No pattern means match-all.
pub struct PatternMatcher {
    glob: Option<GlobMatcher>,
}

impl PatternMatcher {
    /// Compile an optional glob pattern
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let glob = pattern
            .map(|p| Glob::new(p).map(|g| g.compile_matcher()))
            .transpose()?;

        Ok(Self { glob })
    }

    /// Test a single path against the pattern - zero allocation
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        match &self.glob {
            Some(glob) => {
                let segment = path.rsplit('/').next().unwrap_or(path);
                glob.is_match(segment)
            }
            None => true,
        }
    }

    /// Retain matching paths, preserving the input order
    pub fn filter<'a>(&self, paths: Vec<&'a str>) -> Vec<&'a str> {
        if self.glob.is_none() {
            return paths;
        }
        paths.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_matching() {
        let matcher = PatternMatcher::new(Some("*.rs")).unwrap();

        assert!(matcher.matches("main.rs"));
        assert!(matcher.matches("src/lib.rs"));
        assert!(!matcher.matches("README.md"));
    }

    #[test]
    fn test_segment_only_semantics() {
        // The glob never sees the directory part of the path
        let matcher = PatternMatcher::new(Some("test_*.py")).unwrap();

        assert!(matcher.matches("test_api.py"));
        assert!(matcher.matches("deep/nested/test_api.py"));
        assert!(!matcher.matches("tests/api.py"));
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = PatternMatcher::new(Some("*.PY")).unwrap();

        assert!(matcher.matches("SCRIPT.PY"));
        assert!(!matcher.matches("script.py"));
    }

    #[test]
    fn test_no_pattern_matches_all() {
        let matcher = PatternMatcher::new(None).unwrap();

        assert!(matcher.matches("anything"));
        assert!(matcher.matches("any/where.txt"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let matcher = PatternMatcher::new(Some("*.py")).unwrap();
        let filtered = matcher.filter(vec!["a.py", "b.py", "c.txt"]);
        assert_eq!(filtered, ["a.py", "b.py"]);
    }

    #[test]
    fn test_filter_matching_nothing_is_empty_not_error() {
        let matcher = PatternMatcher::new(Some("*.go")).unwrap();
        let filtered = matcher.filter(vec!["a.py", "c.txt"]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        assert!(PatternMatcher::new(Some("a[")).is_err());
    }
}
