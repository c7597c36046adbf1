//! Service implementations
//!
//! Concrete implementations of the interface traits.

pub mod path_normalizer;

pub use path_normalizer::PathNormalizer;
