//! File and page model for mkhooks.
//!
//! This crate holds the values a host documentation build hands to hooks:
//!
//! - [`File`] - one discoverable source document, identified by a
//!   slash-separated relative path
//! - [`Files`] - the ordered set of files discovered for a build, unique by path
//! - [`Page`] - one document being built, with a mutable title
//!
//! The host owns all three. Hooks read files and may replace the whole
//! collection or set a page title, nothing else.
//!
//! # Example
//!
//! ```ignore
//! use mkhooks_files::{File, Files, Page};
//!
//! let files: Files = ["index.md", "guide/setup.md"].into_iter().map(File::new).collect();
//! assert_eq!(files.get("guide/setup.md").map(File::depth), Some(1));
//!
//! let page = Page::new(File::new("guide/setup.md"));
//! assert!(page.title.is_none());
//! ```

mod file;
mod files;
mod page;

pub use file::File;
pub use files::Files;
pub use page::Page;
