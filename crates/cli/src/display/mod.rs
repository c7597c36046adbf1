pub mod formatter;

pub use formatter::{PathReport, render_json, render_plain};
