/// Logging utilities for PII redaction
///
/// Contact submissions carry names, addresses and free text. Log lines only
/// ever get the redacted forms produced here.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s@<>]+@([^\s@<>]+)").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Contact Form <noreply@acme.com>"), "Contact Form <***@acme.com>");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN.replace_all(text, "***@$1").to_string()
}

/// Redacts free text for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Creates safe log context for a submission
///
/// Returns a structured value that can be attached to tracing events
pub fn safe_submission_context(email: &str, service: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "from_domain": extract_domain(email),
        "service": service,
        "message": redact_body(message),
    })
}

/// Extracts domain from email address for safe logging
fn extract_domain(email: &str) -> String {
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
