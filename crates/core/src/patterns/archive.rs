//! Archive boundaries
//!
//! Some schemes address files inside a container (`phar:///app.phar/src/x.php`).
//! Once `..` walks back out of the container segment, the scheme no longer
//! applies and must be dropped from the normalized path.

/// A scheme paired with the literal suffix that names its container segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveBoundary {
    pub scheme: &'static str,
    pub suffix: &'static str,
}

impl ArchiveBoundary {
    /// PHP archives: `phar://` paths with `.phar` containers
    pub const PHAR: Self = Self::new("phar", ".phar");

    pub const fn new(scheme: &'static str, suffix: &'static str) -> Self {
        Self { scheme, suffix }
    }

    /// Whether popping `popped` while under `scheme` leaves the container.
    ///
    /// The suffix test is a plain byte comparison; `notaphar.phar` and
    /// `.phar` both count.
    pub fn crossed_by(&self, scheme: Option<&str>, popped: &str) -> bool {
        scheme == Some(self.scheme) && popped.ends_with(self.suffix)
    }
}

impl Default for ArchiveBoundary {
    fn default() -> Self {
        Self::PHAR
    }
}
