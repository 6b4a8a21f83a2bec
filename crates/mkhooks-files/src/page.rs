//! Page being built.

use crate::file::File;

/// In-memory representation of one document being built.
///
/// The host creates a page per source file and may assign a title from
/// front matter or the first heading before hooks run. `title` stays `None`
/// until something sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Display title.
    pub title: Option<String>,
    file: File,
}

impl Page {
    /// Create an untitled page for a source file.
    #[must_use]
    pub fn new(file: File) -> Self {
        Self { title: None, file }
    }

    /// Set an initial title, as the host does after reading front matter.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Source file of this page.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }
}
