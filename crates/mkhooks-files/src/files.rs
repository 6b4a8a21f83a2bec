//! Ordered file collection.

use std::collections::HashMap;

use crate::file::File;

/// Files discovered for one build.
///
/// Keeps insertion order and is unique by `src_path`. Pushing a file whose
/// path is already present replaces the stored entry in place, so the
/// position of the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Files {
    entries: Vec<File>,
    index: HashMap<String, usize>,
}

impl Files {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, returning the entry it replaced if the path was present.
    pub fn push(&mut self, file: File) -> Option<File> {
        if let Some(&pos) = self.index.get(file.src_path()) {
            return Some(std::mem::replace(&mut self.entries[pos], file));
        }
        self.index
            .insert(file.src_path().to_owned(), self.entries.len());
        self.entries.push(file);
        None
    }

    /// Look up a file by its slash-separated path.
    #[must_use]
    pub fn get(&self, src_path: &str) -> Option<&File> {
        self.index.get(src_path).map(|&pos| &self.entries[pos])
    }

    /// Check whether a file with this path is present.
    #[must_use]
    pub fn contains(&self, src_path: &str) -> bool {
        self.index.contains_key(src_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate files in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, File> {
        self.entries.iter()
    }

    /// Paths of all files in collection order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(File::src_path).collect()
    }
}

impl FromIterator<File> for Files {
    fn from_iter<I: IntoIterator<Item = File>>(iter: I) -> Self {
        let mut files = Self::new();
        files.extend(iter);
        files
    }
}

impl Extend<File> for Files {
    fn extend<I: IntoIterator<Item = File>>(&mut self, iter: I) {
        for file in iter {
            self.push(file);
        }
    }
}

impl IntoIterator for Files {
    type Item = File;
    type IntoIter = std::vec::IntoIter<File>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Files {
    type Item = &'a File;
    type IntoIter = std::slice::Iter<'a, File>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
