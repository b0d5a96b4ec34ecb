/// Data models
pub mod config;
pub mod email;
pub mod submission;

pub use config::*;
pub use email::*;
pub use submission::*;
