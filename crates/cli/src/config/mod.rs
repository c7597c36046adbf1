pub mod loader;

pub use loader::{build_normalizer, load_config};
