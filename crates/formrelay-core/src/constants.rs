/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Provider Constants
// ============================================================================
/// Default Resend endpoint for sending a single email
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Sender identity used when `SENDER_EMAIL` is not configured
pub const DEFAULT_SENDER: &str = "Contact Form <onboarding@resend.dev>";

// ============================================================================
// Timing Constants
// ============================================================================

/// Upper bound on a single dispatch to the email provider, in seconds
pub const DEFAULT_DISPATCH_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Size Limits
// ============================================================================

/// Maximum accepted request body (64 KB)
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Rendering Constants
// ============================================================================

/// Subject prefix for relayed submissions
pub const SUBJECT_PREFIX: &str = "New Contact Form Submission from";

/// Placeholder rendered for optional fields the submitter left blank
pub const EMPTY_FIELD_PLACEHOLDER: &str = "-";

// ============================================================================
// Environment Variable Names
// ============================================================================

pub const ENV_EMAIL_PROVIDER: &str = "EMAIL_PROVIDER";
pub const ENV_RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_RESEND_API_URL: &str = "RESEND_API_URL";
pub const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub const ENV_SMTP_USERNAME: &str = "SMTP_USERNAME";
pub const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const ENV_RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
pub const ENV_SENDER_EMAIL: &str = "SENDER_EMAIL";
pub const ENV_DISPATCH_TIMEOUT_SECS: &str = "DISPATCH_TIMEOUT_SECS";
