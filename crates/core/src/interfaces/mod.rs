//! Core interfaces
//!
//! This module defines the trait seams between the normalizer and the code
//! that consumes normalized paths.

pub mod path_resolver;

pub use path_resolver::PathResolver;
