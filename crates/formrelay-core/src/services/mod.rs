/// Service layer modules
pub mod config;
pub mod relay;
pub mod resend;
pub mod sender;
pub mod smtp;

pub use config::*;
pub use relay::*;
pub use resend::*;
pub use sender::*;
pub use smtp::*;
