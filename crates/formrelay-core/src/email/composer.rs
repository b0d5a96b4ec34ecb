/// Renders a validated submission into an outbound email
use crate::constants::{EMPTY_FIELD_PLACEHOLDER, SUBJECT_PREFIX};
use crate::models::{OutboundEmail, RelayConfig, ValidSubmission};
use crate::utils::sanitization::{escape_html, sanitize_header_value};
use crate::utils::validation::is_valid_email;
use lettre::Address;

/// Builds the email for `submission` using the configured sender and recipient
///
/// The recipient always comes from configuration; the submitter's address is
/// only ever used as reply-to, and only when it is a deliverable address.
/// Addresses that match the form pattern but not RFC 5322 are dropped.
pub fn compose(submission: &ValidSubmission, config: &RelayConfig) -> OutboundEmail {
    let email = OutboundEmail::builder()
        .from(config.sender.as_str())
        .to(config.recipient.as_str())
        .subject(render_subject(&submission.first_name, &submission.last_name))
        .text(render_text(submission))
        .html(render_html(submission));

    if is_valid_email(&submission.email) && submission.email.parse::<Address>().is_ok() {
        email.reply_to(submission.email.as_str()).build()
    } else {
        tracing::warn!("Dropping malformed reply-to address");
        email.build()
    }
}

pub fn render_subject(first_name: &str, last_name: &str) -> String {
    sanitize_header_value(&format!("{SUBJECT_PREFIX} {first_name} {last_name}"))
}

/// Field labels and values in display order, message excluded
fn fields(submission: &ValidSubmission) -> [(&'static str, Option<&str>); 9] {
    [
        ("First Name", Some(submission.first_name.as_str())),
        ("Last Name", Some(submission.last_name.as_str())),
        ("Email", Some(submission.email.as_str())),
        ("Phone", submission.phone.as_deref()),
        ("Company", submission.company.as_deref()),
        ("Service", Some(submission.service.as_str())),
        ("Origin", submission.origin.as_deref()),
        ("Destination", submission.destination.as_deref()),
        ("Cargo Details", submission.cargo_details.as_deref()),
    ]
}

pub fn render_text(submission: &ValidSubmission) -> String {
    let mut text = String::from("New contact form submission\n\n");
    for (label, value) in fields(submission) {
        text.push_str(label);
        text.push_str(": ");
        text.push_str(value.unwrap_or(EMPTY_FIELD_PLACEHOLDER));
        text.push('\n');
    }
    text.push_str("\nMessage:\n");
    text.push_str(&submission.message);
    text.push('\n');
    text
}

pub fn render_html(submission: &ValidSubmission) -> String {
    let mut html = String::from("<h2>New Contact Form Submission</h2>\n<table>\n");
    for (label, value) in fields(submission) {
        let value = value.map(escape_html);
        html.push_str(&format!(
            "<tr><td><strong>{label}:</strong></td><td>{}</td></tr>\n",
            value.as_deref().unwrap_or(EMPTY_FIELD_PLACEHOLDER)
        ));
    }
    html.push_str("</table>\n<h3>Message</h3>\n<p>");
    html.push_str(&escape_html(&submission.message).replace('\n', "<br>"));
    html.push_str("</p>\n");
    html
}
