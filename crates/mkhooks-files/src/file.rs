//! Single source file entry.

use std::path::{Component, Path};

/// One discoverable content item.
///
/// # Path Convention
///
/// `src_path` is relative to the docs directory and always uses `/` as the
/// separator, regardless of the host platform:
/// - `"index.md"` - root file, depth 0
/// - `"guide/setup.md"` - nested file, depth 1
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    src_path: String,
}

impl File {
    /// Create a file entry from a slash-separated relative path.
    #[must_use]
    pub fn new(src_path: impl Into<String>) -> Self {
        Self {
            src_path: src_path.into(),
        }
    }

    /// Create a file entry from a relative filesystem path.
    ///
    /// Only normal components are kept and they are joined with `/`, so
    /// `guide\setup.md` on Windows and `guide/setup.md` elsewhere produce the
    /// same entry. `.` components and root prefixes are dropped.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let parts: Vec<_> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();
        Self::new(parts.join("/"))
    }

    /// Slash-separated path relative to the docs directory.
    #[must_use]
    pub fn src_path(&self) -> &str {
        &self.src_path
    }

    /// Number of `/` separators in the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.src_path.matches('/').count()
    }

    /// Final path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        let trimmed = self.src_path.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }

    /// Final path segment without its last extension.
    ///
    /// A dot at the start or at the end of the name does not begin an
    /// extension: `.pages` and `notes.` are returned as-is. This follows
    /// Python's `pathlib` before 3.14, which the original hooks ran on;
    /// 3.14 strips the trailing dot and would give `notes`.
    #[must_use]
    pub fn stem(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(dot) if dot > 0 && dot + 1 < name.len() => &name[..dot],
            _ => name,
        }
    }
}

impl From<&str> for File {
    fn from(src_path: &str) -> Self {
        Self::new(src_path)
    }
}

impl From<String> for File {
    fn from(src_path: String) -> Self {
        Self::new(src_path)
    }
}
