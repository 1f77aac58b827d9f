//! Content page discovery by filesystem walking.
//!
//! Builds the set of page keys a site would serve from a content directory:
//! - `index.md` -> `""`
//! - `guide.md` -> `"guide"`
//! - `guide/index.md` -> `"guide"`
//! - `guide/setup.md` -> `"guide/setup"`
//!
//! Hidden files and directories are skipped, as are files matching any
//! exclude pattern (matched against the `/`-separated path relative to the
//! content root).
//!
//! Entries are visited in file-name order, so when `guide/index.md` and
//! `guide.md` both exist the directory index always wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::link::normalize_key;

/// Pages found under a content directory, keyed by page key.
#[derive(Debug, Default)]
pub struct ContentIndex {
    root: PathBuf,
    pages: BTreeMap<String, PathBuf>,
}

impl ContentIndex {
    /// Scan `root` for markdown pages.
    ///
    /// Returns an empty index if the directory doesn't exist.
    #[must_use]
    pub fn scan(root: &Path, exclude: &[Pattern]) -> Self {
        let mut index = Self {
            root: root.to_path_buf(),
            pages: BTreeMap::new(),
        };

        if root.is_dir() {
            index.scan_directory(root, "", exclude);
        } else {
            tracing::warn!(dir = %root.display(), "Content directory not found");
        }

        tracing::debug!(
            dir = %root.display(),
            page_count = index.pages.len(),
            "Content scan completed"
        );
        index
    }

    /// Content directory this index was built from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a page exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn scan_directory(&mut self, dir_path: &Path, rel_prefix: &str, exclude: &[Pattern]) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir_path.display(), error = %e, "Failed to read directory");
                return;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let rel = if rel_prefix.is_empty() {
                name.clone()
            } else {
                format!("{rel_prefix}/{name}")
            };
            let path = entry.path();

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, &rel, exclude);
            } else if name.to_ascii_lowercase().ends_with(".md") {
                if exclude.iter().any(|p| p.matches(&rel)) {
                    tracing::debug!(path = %rel, "Excluded from content");
                    continue;
                }
                self.insert(normalize_key(&rel), path);
            }
        }
    }

    fn insert(&mut self, key: String, path: PathBuf) {
        if let Some(existing) = self.pages.get(&key) {
            // guide.md and guide/index.md both claim "guide"
            tracing::warn!(
                key = %key,
                kept = %existing.display(),
                ignored = %path.display(),
                "Two files map to the same page"
            );
            return;
        }
        self.pages.insert(key, path);
    }
}

/// Compile glob patterns, skipping (and logging) invalid ones.
pub(crate) fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!(pattern = %p, error = %e, "Ignoring invalid pattern");
                None
            }
        })
        .collect()
}
