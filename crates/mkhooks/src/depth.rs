//! Directory depth filter.
//!
//! Limits a build to files near the top of the docs tree. Depth is the
//! number of `/` separators in a file's relative path, so `index.md` has
//! depth 0 and `guide/setup.md` has depth 1. A limit of `N` keeps files with
//! depth strictly below `N`.
//!
//! The limit comes from an environment variable read on every call. When the
//! variable is unset, empty, or not an integer, the filter keeps everything.

use std::num::IntErrorKind;

use mkhooks_config::{Config, DEFAULT_DEPTH_ENV_VAR, HookName};
use mkhooks_files::Files;

use crate::hook::Hook;

/// Hook that drops files nested at or below the configured depth.
#[derive(Debug, Clone)]
pub struct DepthFilter {
    env_var: String,
}

impl DepthFilter {
    /// Create a filter that reads its limit from `env_var`.
    #[must_use]
    pub fn new(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
        }
    }

    /// Name of the environment variable holding the limit.
    #[must_use]
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Read the current limit from the environment.
    ///
    /// Returns `None` when filtering is disabled.
    #[must_use]
    pub fn max_depth(&self) -> Option<i64> {
        // Non-Unicode values are treated like an unset variable.
        let value = std::env::var(&self.env_var).ok()?;
        let max_depth = parse_max_depth(&value);
        if max_depth.is_none() && !value.trim().is_empty() {
            tracing::debug!(env_var = %self.env_var, value = %value, "Ignoring unparsable depth limit");
        }
        max_depth
    }
}

impl Default for DepthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_ENV_VAR)
    }
}

impl Hook for DepthFilter {
    fn name(&self) -> &'static str {
        HookName::DepthFilter.as_str()
    }

    fn on_files(&self, files: Files, _config: &Config) -> Files {
        let Some(max_depth) = self.max_depth() else {
            tracing::debug!(env_var = %self.env_var, "Depth filter disabled");
            return files;
        };

        let total = files.len();
        let filtered = filter_by_depth(files, max_depth);
        tracing::debug!(
            max_depth,
            kept = filtered.len(),
            removed = total - filtered.len(),
            "Filtered files by depth"
        );
        filtered
    }
}

/// Parse a depth limit.
///
/// Surrounding whitespace and a leading `+` or `-` are accepted. Integers
/// beyond the `i64` range saturate, so a huge negative limit still removes
/// every file and a huge positive one keeps them all. Returns `None` for
/// empty or non-integer input.
///
/// Only ASCII digits are accepted: `1_0` and non-ASCII digits disable the
/// filter instead of being read as numbers.
#[must_use]
pub fn parse_max_depth(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(max_depth) => Some(max_depth),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Keep files whose depth is strictly less than `max_depth`.
///
/// Surviving files keep their relative order. A limit of zero or below
/// removes every file.
#[must_use]
pub fn filter_by_depth(files: Files, max_depth: i64) -> Files {
    files
        .into_iter()
        .filter(|file| i64::try_from(file.depth()).is_ok_and(|depth| depth < max_depth))
        .collect()
}

#[cfg(test)]
mod tests {
    use mkhooks_files::File;
    use pretty_assertions::assert_eq;

    use super::*;

    fn files(paths: &[&str]) -> Files {
        paths.iter().copied().map(File::new).collect()
    }

    fn sample() -> Files {
        files(&["a.md", "x/b.md", "x/y/c.md", "z.md", "x/y/z/d.md"])
    }

    #[test]
    fn test_parse_max_depth_valid() {
        assert_eq!(parse_max_depth("3"), Some(3));
        assert_eq!(parse_max_depth("0"), Some(0));
        assert_eq!(parse_max_depth(" 2\n"), Some(2));
        assert_eq!(parse_max_depth("+4"), Some(4));
        assert_eq!(parse_max_depth("-1"), Some(-1));
    }

    #[test]
    fn test_parse_max_depth_invalid() {
        assert_eq!(parse_max_depth(""), None);
        assert_eq!(parse_max_depth("   "), None);
        assert_eq!(parse_max_depth("two"), None);
        assert_eq!(parse_max_depth("2.5"), None);
        assert_eq!(parse_max_depth("3 levels"), None);
        assert_eq!(parse_max_depth("1_0"), None);
        assert_eq!(parse_max_depth("٣"), None);
    }

    #[test]
    fn test_parse_max_depth_saturates_out_of_range() {
        assert_eq!(parse_max_depth("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_max_depth("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_max_depth(" +99999999999999999999 "), Some(i64::MAX));
    }

    #[test]
    fn test_filter_by_depth_one() {
        let result = filter_by_depth(files(&["a.md", "x/b.md", "x/y/c.md"]), 1);
        assert_eq!(result.paths(), vec!["a.md"]);
    }

    #[test]
    fn test_filter_by_depth_preserves_order() {
        let result = filter_by_depth(sample(), 2);
        assert_eq!(result.paths(), vec!["a.md", "x/b.md", "z.md"]);
    }

    #[test]
    fn test_filter_by_depth_large_limit_keeps_all() {
        assert_eq!(filter_by_depth(sample(), 100), sample());
    }

    #[test]
    fn test_filter_by_depth_zero_or_negative_removes_all() {
        assert!(filter_by_depth(sample(), 0).is_empty());
        assert!(filter_by_depth(sample(), -3).is_empty());
    }

    #[test]
    fn test_filter_by_depth_idempotent() {
        for max_depth in -1..5 {
            let once = filter_by_depth(sample(), max_depth);
            let twice = filter_by_depth(once.clone(), max_depth);
            assert_eq!(once, twice, "max_depth = {max_depth}");
        }
    }

    #[test]
    fn test_filter_by_depth_never_adds_files() {
        let input = sample();
        let result = filter_by_depth(input.clone(), 3);
        assert!(result.iter().all(|f| input.contains(f.src_path())));
    }

    #[test]
    fn test_default_env_var() {
        assert_eq!(DepthFilter::default().env_var(), "MKDOCS_DEPTH");
    }

    #[test]
    fn test_on_files_with_limit() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_LIMIT", "1");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_LIMIT");
        let result = filter.on_files(
            files(&["a.md", "x/b.md", "x/y/c.md"]),
            &Config::default(),
        );
        assert_eq!(result.paths(), vec!["a.md"]);
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_LIMIT");
        }
    }

    #[test]
    fn test_on_files_unset_is_noop() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_UNSET");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_UNSET");
        let input = files(&["a.md", "x/b.md"]);

        let result = filter.on_files(input.clone(), &Config::default());

        assert_eq!(result, input);
        assert_eq!(result.paths(), vec!["a.md", "x/b.md"]);
    }

    #[test]
    fn test_on_files_empty_is_noop() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_EMPTY", "");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_EMPTY");
        assert_eq!(filter.on_files(sample(), &Config::default()), sample());
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_EMPTY");
        }
    }

    #[test]
    fn test_on_files_non_numeric_is_noop() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_BAD", "deep");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_BAD");
        assert!(filter.max_depth().is_none());
        assert_eq!(filter.on_files(sample(), &Config::default()), sample());
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_BAD");
        }
    }

    #[test]
    fn test_on_files_reads_env_on_every_call() {
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_REREAD");
        let config = Config::default();

        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_REREAD", "1");
        }
        assert_eq!(filter.on_files(sample(), &config).len(), 2);

        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_REREAD", "2");
        }
        assert_eq!(filter.on_files(sample(), &config).len(), 3);

        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_REREAD");
        }
        assert_eq!(filter.on_files(sample(), &config).len(), 5);
    }

    #[test]
    fn test_on_files_huge_negative_removes_all() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_HUGE_NEG", "-99999999999999999999");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_HUGE_NEG");
        let result = filter.on_files(files(&["a.md", "x/b.md"]), &Config::default());
        assert!(result.is_empty());
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_HUGE_NEG");
        }
    }

    #[test]
    fn test_on_files_huge_positive_keeps_all() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_HUGE_POS", "99999999999999999999");
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_HUGE_POS");
        assert_eq!(filter.on_files(sample(), &Config::default()), sample());
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_HUGE_POS");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_on_files_non_unicode_is_noop() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MKHOOKS_TEST_DEPTH_NON_UTF8", OsStr::from_bytes(b"\xff"));
        }
        let filter = DepthFilter::new("MKHOOKS_TEST_DEPTH_NON_UTF8");
        assert!(filter.max_depth().is_none());
        assert_eq!(filter.on_files(sample(), &Config::default()), sample());
        unsafe {
            std::env::remove_var("MKHOOKS_TEST_DEPTH_NON_UTF8");
        }
    }
}
