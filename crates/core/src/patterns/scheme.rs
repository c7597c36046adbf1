//! Scheme prefix detection
//!
//! Recognizes `scheme://rest` spellings without mistaking a Windows drive
//! letter (`C:\`) for a one-letter scheme.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-input match: scheme plus a non-empty remainder.
///
/// The character class is spelled out in both cases instead of using `(?i)`
/// so that Unicode case folding (e.g. KELVIN SIGN for `k`) cannot sneak in.
static SCHEME_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z0-9+.\-]+)://(.+)$").expect("scheme path pattern is valid")
});

/// Prefix-only match, used when deciding whether a path is already absolute.
static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+.\-]+://").expect("scheme prefix pattern is valid")
});

/// A path split into its lowercased scheme and the remainder after `://`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePath<'a> {
    pub scheme: String,
    pub path: &'a str,
}

/// Split `scheme://rest` into its parts.
///
/// Returns `None` when the input has no scheme or nothing follows `://`.
pub fn split_scheme(path: &str) -> Option<SchemePath<'_>> {
    let captures = SCHEME_PATH.captures(path)?;
    let scheme = captures.get(1)?.as_str().to_ascii_lowercase();
    let rest = captures.get(2)?.as_str();

    tracing::trace!("Detected scheme '{}' in {:?}", scheme, path);

    Some(SchemePath { scheme, path: rest })
}

/// Check whether the path begins with `scheme://`
pub fn has_scheme_prefix(path: &str) -> bool {
    SCHEME_PREFIX.is_match(path)
}

/// A path that is absolute by local convention: a leading `/`, or a drive
/// letter followed by `:\`.
///
/// Only these paths skip scheme detection; `C:/x` still goes through it.
pub fn is_local_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.first() == Some(&b'/') || (bytes.len() >= 3 && bytes[1] == b':' && bytes[2] == b'\\')
}
