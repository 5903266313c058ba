//! HTML text utilities used when rendering attributes.

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attribute(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Returns `true` if `name` can be written as an attribute name unescaped.
///
/// Attribute names have no escaping, so whitespace, quotes, `=`, `<`, `>`,
/// `/` and control characters are refused.
pub fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

/// Removes markup tags, keeping the text between them.
///
/// An unterminated `<` swallows the rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match (in_tag, ch) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, _) => output.push(ch),
            (true, _) => {}
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_attribute_plain_text_unchanged() {
        assert_eq!(escape_attribute("this is a string"), "this is a string");
        assert_eq!(escape_attribute("日本語"), "日本語");
    }

    #[test]
    fn test_is_attribute_name() {
        assert!(is_attribute_name("class"));
        assert!(is_attribute_name("data-toggle"));
        assert!(is_attribute_name("zeroAsString"));
        assert!(is_attribute_name("aria-label"));

        assert!(!is_attribute_name(""));
        assert!(!is_attribute_name("a\" onclick=\"x"));
        assert!(!is_attribute_name("a b"));
        assert!(!is_attribute_name("x='y'"));
        assert!(!is_attribute_name("<script>"));
        assert!(!is_attribute_name("a/b"));
        assert!(!is_attribute_name("tab\there"));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>Bold</b> text"), "Bold text");
        assert_eq!(strip_tags("no tags"), "no tags");
        assert_eq!(strip_tags("a <br/>b"), "a b");
    }

    #[test]
    fn test_strip_tags_unterminated() {
        assert_eq!(strip_tags("text <span"), "text ");
    }
}
