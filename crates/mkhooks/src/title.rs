//! Page titles from source filenames.

use mkhooks_config::{Config, HookName};
use mkhooks_files::{Files, Page};

use crate::hook::Hook;

/// Hook that titles each page after its source filename.
///
/// `notes/2024-plan.md` becomes `2024-plan`. Only the last extension is
/// stripped, so `a.b.md` becomes `a.b`. Content passes through unchanged.
#[derive(Debug, Clone)]
pub struct FilenameTitle {
    overwrite: bool,
}

impl FilenameTitle {
    /// Create a hook that replaces any title the host already set.
    #[must_use]
    pub fn new() -> Self {
        Self { overwrite: true }
    }

    /// Only title pages that have no title yet.
    #[must_use]
    pub fn keep_existing(mut self) -> Self {
        self.overwrite = false;
        self
    }

    /// Set from `[filename_title] overwrite`.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Apply the filename title to a page.
    pub fn apply(&self, page: &mut Page) {
        if !self.overwrite && page.title.is_some() {
            return;
        }
        page.title = Some(page.file().stem().to_owned());
    }
}

impl Default for FilenameTitle {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook for FilenameTitle {
    fn name(&self) -> &'static str {
        HookName::FilenameTitle.as_str()
    }

    fn on_page_content(
        &self,
        html: String,
        page: &mut Page,
        _config: &Config,
        _files: &Files,
    ) -> String {
        self.apply(page);
        html
    }
}
