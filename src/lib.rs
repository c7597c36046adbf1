//! Facade over `pathnorm-core` for the workspace integration tests
pub use pathnorm_core::*;
