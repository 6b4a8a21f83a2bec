//! Hook trait and ordered dispatch.
//!
//! The host build calls two extension points:
//!
//! - `on_files` once per build, after discovery and before any page is processed
//! - `on_page_content` once per page, after rendering and before output is written
//!
//! [`HookChain`] runs registered hooks in registration order at each point,
//! feeding each hook the output of the previous one.

use std::fmt;

use mkhooks_config::Config;
use mkhooks_files::{Files, Page};

/// A build hook.
///
/// Both extension points default to pass-through, so a hook implements only
/// the ones it cares about. Hooks must not keep state between calls.
pub trait Hook: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Replace the discovered file collection.
    fn on_files(&self, files: Files, _config: &Config) -> Files {
        files
    }

    /// Post-process rendered page content.
    ///
    /// May mutate the page. The returned string becomes the page content.
    fn on_page_content(
        &self,
        html: String,
        _page: &mut Page,
        _config: &Config,
        _files: &Files,
    ) -> String {
        html
    }
}

/// Hooks registered for a build, in dispatch order.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookChain {
    /// Create an empty chain. An empty chain passes everything through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook.
    #[must_use]
    pub fn with_hook(mut self, hook: impl Hook + 'static) -> Self {
        self.push(Box::new(hook));
        self
    }

    /// Append a boxed hook.
    pub fn push(&mut self, hook: Box<dyn Hook>) {
        self.hooks.push(hook);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Hook names in dispatch order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Run `on_files` across all hooks.
    pub fn run_files(&self, files: Files, config: &Config) -> Files {
        self.hooks.iter().fold(files, |files, hook| {
            tracing::trace!(hook = hook.name(), "on_files");
            hook.on_files(files, config)
        })
    }

    /// Run `on_page_content` across all hooks for one page.
    pub fn run_page_content(
        &self,
        html: String,
        page: &mut Page,
        config: &Config,
        files: &Files,
    ) -> String {
        self.hooks.iter().fold(html, |html, hook| {
            tracing::trace!(hook = hook.name(), path = %page.file().src_path(), "on_page_content");
            hook.on_page_content(html, page, config, files)
        })
    }
}

impl fmt::Debug for HookChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.names())
            .finish()
    }
}
