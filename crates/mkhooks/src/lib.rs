//! Build hooks for a static documentation generator.
//!
//! Two hooks are provided:
//!
//! - [`DepthFilter`] drops discovered files nested deeper than the limit in
//!   the `MKDOCS_DEPTH` environment variable
//! - [`FilenameTitle`] sets each page title to its source filename without
//!   the extension
//!
//! Hooks are registered explicitly in a [`HookChain`], either one by one or
//! from the `hooks` list of `mkhooks.toml`. The host calls the chain at its
//! two extension points:
//!
//! ```ignore
//! use mkhooks::HookChain;
//! use mkhooks_config::Config;
//!
//! let config = Config::load(None)?;
//! let chain = HookChain::from_config(&config);
//!
//! let files = chain.run_files(discovered, &config);
//! for page in &mut pages {
//!     let html = chain.run_page_content(render(page), page, &config, &files);
//! }
//! ```

mod depth;
mod hook;
mod registry;
mod title;

pub use depth::{DepthFilter, filter_by_depth, parse_max_depth};
pub use hook::{Hook, HookChain};
pub use title::FilenameTitle;

pub use mkhooks_config::{Config, ConfigError, DEFAULT_DEPTH_ENV_VAR, HookName};
pub use mkhooks_files::{File, Files, Page};
