//! Pattern recognition for path spellings

pub mod archive;
pub mod scheme;

pub use archive::ArchiveBoundary;
pub use scheme::{SchemePath, has_scheme_prefix, is_local_absolute, split_scheme};
