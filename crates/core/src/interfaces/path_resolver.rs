//! Path resolution interface
//!
//! Higher-level consumers (caches, deduplication, display) depend on this
//! trait rather than on a concrete normalizer so that alternative hosts can
//! supply their own separator conventions.

/// Trait for pure, string-level path operations
pub trait PathResolver: Send + Sync {
    /// The configured working directory, already normalized
    fn working_directory(&self) -> &str;

    /// Canonicalize a path using the given directory separator
    fn normalize(&self, path: &str, separator: &str) -> String;

    /// Canonicalize a path using the host separator
    fn normalize_native(&self, path: &str) -> String;

    /// Anchor a relative path to the working directory (no normalization)
    fn absolutize(&self, path: &str) -> String;

    /// Absolutize, then normalize with the host separator.
    ///
    /// This is the form to use as a cache or deduplication key.
    fn resolve(&self, path: &str) -> String {
        self.normalize_native(&self.absolutize(path))
    }
}
