/// Formrelay Core - Shared library for the formrelay contact form relay
///
/// This crate contains the submission model, validation and rendering rules,
/// configuration loading and the email sender implementations used by the
/// formrelay API Lambda function.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
