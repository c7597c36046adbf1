//! Default path resolver implementation
//!
//! Pure string transformations: nothing here touches the filesystem, checks
//! existence, or follows symlinks.

use crate::{
    config::Config,
    interfaces::PathResolver,
    patterns::{ArchiveBoundary, SchemePath, has_scheme_prefix, is_local_absolute, split_scheme},
};
use std::path::MAIN_SEPARATOR_STR;
use tracing::{debug, trace};

/// Separator runs folded into a single `/`, applied in order
const SEPARATOR_RUNS: [&str; 3] = ["//", "///", "////"];

/// Normalizes and absolutizes path strings against a fixed working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNormalizer {
    working_directory: String,
    separator: String,
    archive_boundaries: Vec<ArchiveBoundary>,
}

impl PathNormalizer {
    /// Create a normalizer using the host's native separator
    pub fn new(working_directory: impl AsRef<str>) -> Self {
        Self::with_separator(working_directory, MAIN_SEPARATOR_STR)
    }

    /// Create a normalizer that behaves as if `separator` were the host's
    /// native separator.
    pub fn with_separator(working_directory: impl AsRef<str>, separator: impl Into<String>) -> Self {
        let mut normalizer = Self {
            working_directory: String::new(),
            separator: separator.into(),
            archive_boundaries: vec![ArchiveBoundary::PHAR],
        };
        normalizer.working_directory = normalizer.normalize_native(working_directory.as_ref());

        debug!(
            "Configured path normalizer: working_directory={:?}, separator={:?}",
            normalizer.working_directory, normalizer.separator
        );
        normalizer
    }

    /// Create a normalizer from settings, falling back to `fallback_cwd`
    /// when no working directory is configured.
    pub fn from_config(config: &Config, fallback_cwd: &str) -> Self {
        Self::with_separator(
            config.resolve_working_directory(fallback_cwd),
            config.host_separator(),
        )
    }

    /// Register another scheme whose container segments end `..` traversal
    /// out of the scheme.
    pub fn with_archive_boundary(mut self, boundary: ArchiveBoundary) -> Self {
        if !self.archive_boundaries.contains(&boundary) {
            self.archive_boundaries.push(boundary);
        }
        self
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Canonicalize `original_path` so that it uses `directory_separator`
    /// only, has no empty segments, and has every `.`/`..` resolved.
    ///
    /// A `scheme://` prefix is lowercased and re-attached, unless a `..`
    /// popped an archive container segment of that scheme. `..` past the
    /// first segment is dropped.
    pub fn normalize_path(&self, original_path: &str, directory_separator: &str) -> String {
        let split = if is_local_absolute(original_path) {
            None
        } else {
            split_scheme(original_path)
        };

        let (mut scheme, path) = match split {
            Some(SchemePath { scheme, path }) => (Some(scheme), path),
            None => (None, original_path),
        };

        let path = fold_separators(path);
        let path_root = if path.starts_with('/') {
            directory_separator
        } else {
            ""
        };

        let mut segments: Vec<&str> = Vec::new();
        for segment in path.trim_matches('/').split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    let Some(popped) = segments.pop() else {
                        continue;
                    };
                    if self.crosses_archive_boundary(scheme.as_deref(), popped) {
                        debug!("Left archive '{}', dropping scheme from {:?}", popped, original_path);
                        scheme = None;
                    }
                }
                _ => segments.push(segment),
            }
        }

        let joined = segments.join(directory_separator);
        let mut normalized = String::with_capacity(
            scheme.as_ref().map_or(0, |s| s.len() + 3) + path_root.len() + joined.len(),
        );
        if let Some(scheme) = &scheme {
            normalized.push_str(scheme);
            normalized.push_str("://");
        }
        normalized.push_str(path_root);
        normalized.push_str(&joined);

        trace!("normalize_path: {:?} -> {:?}", original_path, normalized);
        normalized
    }

    /// [`normalize_path`](Self::normalize_path) with the host separator
    pub fn normalize_native(&self, original_path: &str) -> String {
        self.normalize_path(original_path, &self.separator)
    }

    /// Anchor a relative path to the working directory.
    ///
    /// Already absolute paths (leading `/` on a `/` host, a drive letter
    /// otherwise) and `scheme://` paths come back unchanged. The result is
    /// not normalized.
    pub fn absolutize_path(&self, path: &str) -> String {
        if self.separator == "/" {
            if path.starts_with('/') {
                return path.to_string();
            }
        } else if path.as_bytes().get(1) == Some(&b':') {
            return path.to_string();
        }

        if has_scheme_prefix(path) {
            return path.to_string();
        }

        format!(
            "{}{}{}",
            self.working_directory.trim_end_matches(['/', '\\']),
            self.separator,
            path.trim_start_matches(['/', '\\'])
        )
    }

    fn crosses_archive_boundary(&self, scheme: Option<&str>, popped: &str) -> bool {
        self.archive_boundaries
            .iter()
            .any(|boundary| boundary.crossed_by(scheme, popped))
    }
}

impl PathResolver for PathNormalizer {
    fn working_directory(&self) -> &str {
        PathNormalizer::working_directory(self)
    }

    fn normalize(&self, path: &str, separator: &str) -> String {
        self.normalize_path(path, separator)
    }

    fn normalize_native(&self, path: &str) -> String {
        PathNormalizer::normalize_native(self, path)
    }

    fn absolutize(&self, path: &str) -> String {
        self.absolutize_path(path)
    }
}

/// Turn every `\` into `/` and collapse the short separator runs
fn fold_separators(path: &str) -> String {
    SEPARATOR_RUNS
        .iter()
        .fold(path.replace('\\', "/"), |folded, run| folded.replace(run, "/"))
}
