pub mod absolutize;
pub mod cwd;
pub mod normalize;

pub use absolutize::absolutize_command;
pub use cwd::cwd_command;
pub use normalize::normalize_command;
