//! Link classification and normalization.
//!
//! Every declared link is one of:
//! - internal: a site path starting with a single `/` (`/guide/`, `/schema/vars#env`)
//! - external: a fully-qualified URL (`https://github.com/...`, `mailto:...`)
//! - invalid: anything else (`guide/intro`, `//cdn.example.com`, `""`)

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Regex to match a URL with a scheme and host, or a `mailto:`/`tel:` URI.
static EXTERNAL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://[^/\s?#]+|(?:mailto|tel):\S+)").unwrap()
});

/// Kind of a declared link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Site path starting with `/`.
    Internal(&'a str),
    /// Fully-qualified URL.
    External(&'a str),
    /// Neither rooted nor a URL.
    Invalid(&'a str),
}

impl LinkKind<'_> {
    /// Whether the link points outside the site.
    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Classify a declared link.
#[must_use]
pub fn classify(link: &str) -> LinkKind<'_> {
    if link.starts_with("//") {
        LinkKind::Invalid(link)
    } else if link.starts_with('/') {
        LinkKind::Internal(link)
    } else if EXTERNAL_URL.is_match(link) {
        LinkKind::External(link)
    } else {
        LinkKind::Invalid(link)
    }
}

/// Convert an internal link path to a content page key.
///
/// Keys use the same shape as content scanning: no leading or trailing slash,
/// no extension, `""` for the site root.
///
/// - `/` -> `""`
/// - `/guide/` -> `"guide"`
/// - `/guide/intro.html#install` -> `"guide/intro"`
/// - `/guide/index.md` -> `"guide"`
/// - `/Guide.MD` -> `"Guide"`
/// - `/my%20page` -> `"my page"`
#[must_use]
pub fn page_key(path: &str) -> String {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    normalize_key(&decoded)
}

/// Map a slash-separated page path to its key.
///
/// Shared by content scanning and link checking. A trailing `/` names a
/// directory, whose key is the directory itself. Otherwise `.md`/`.html`
/// (any ASCII case) is dropped and a final `index` segment collapses into
/// its parent. So `index/index.md` and `/index/` both map to `"index"`.
pub(crate) fn normalize_key(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if path.is_empty() || path.ends_with('/') {
        return trimmed.to_owned();
    }

    let stem = strip_suffix_ignore_case(trimmed, ".md")
        .or_else(|| strip_suffix_ignore_case(trimmed, ".html"))
        .unwrap_or(trimmed);

    if stem == "index" {
        String::new()
    } else if let Some(dir) = stem.strip_suffix("/index") {
        dir.to_owned()
    } else {
        stem.to_owned()
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (stem, ext) = (s.get(..split)?, s.get(split..)?);
    ext.eq_ignore_ascii_case(suffix).then_some(stem)
}

/// Prefix an internal path with the site base path.
///
/// `base` is expected to end with `/` and `path` to start with `/`.
#[must_use]
pub fn with_base(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
