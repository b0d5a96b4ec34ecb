//! HTML and header sanitization utilities

/// Escapes the five HTML-reserved characters so user input renders as text
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Tom & \"Jerry's\""), "Tom &amp; &quot;Jerry&#39;s&quot;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Removes control characters (CR, LF, NUL, ...) from a single-line header value
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::sanitize_header_value;
///
/// assert_eq!(sanitize_header_value("Hi\r\nBcc: x@y.com"), "HiBcc: x@y.com");
/// ```
pub fn sanitize_header_value(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}
