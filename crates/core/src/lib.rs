//! pathnorm - stable, platform-independent path keys
//!
//! This crate provides functionality to:
//! - Normalize path strings: fold `\` and repeated `/`, resolve `.` and `..`
//! - Keep or drop `scheme://` prefixes, including leaving `phar://` archives
//! - Anchor relative paths to a fixed working directory
//!
//! Everything is a pure string transformation; the filesystem is never
//! consulted.
pub mod config;
pub mod error;
pub mod interfaces;
pub mod patterns;
pub mod services;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use config::Config;
pub use interfaces::PathResolver;
pub use patterns::ArchiveBoundary;
pub use services::PathNormalizer;
