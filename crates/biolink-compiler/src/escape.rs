//! Value escaping for strict mode.
//!
//! The compatibility default interpolates descriptor text verbatim; these
//! helpers are applied only when [`CompileOptions::strict`] is in effect.
//!
//! [`CompileOptions::strict`]: crate::compile::CompileOptions::strict

/// Escape a value for HTML text and double-quoted attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted JavaScript string literal.
pub fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(escape_html(r#"<b>"a" & b</b>"#), "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_js("https://example.com/a?b=c"), "https://example.com/a?b=c");
    }

    #[test]
    fn escapes_js_string_breakers() {
        assert_eq!(escape_js("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    }
}
