//! Shared HTML utilities for Arcadia task views.
//!
//! Provides the text escaping used by every view that inserts user-supplied
//! strings (task text, display names) into markup.

use std::borrow::Cow;

/// Escape text for safe insertion into HTML element content or a quoted
/// attribute value.
///
/// Only the five standard metacharacters are replaced:
///
/// | Input | Output   |
/// |-------|----------|
/// | `&`   | `&amp;`  |
/// | `<`   | `&lt;`   |
/// | `>`   | `&gt;`   |
/// | `"`   | `&quot;` |
/// | `'`   | `&#39;`  |
///
/// Input without any of them is returned borrowed.
///
/// # Example
///
/// ```
/// use arcadia_html::escape_html;
///
/// assert_eq!(escape_html("Buy milk"), "Buy milk");
/// assert_eq!(
///     escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
/// );
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_metachar) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + 16);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            other => result.push(other),
        }
    }
    Cow::Owned(result)
}

fn is_metachar(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        let result = escape_html("Walk the dog");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Walk the dog");
    }

    #[test]
    fn escapes_script_tag() {
        let result = escape_html("<script>alert(1)</script>");
        assert_eq!(result, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn escapes_ampersand_before_other_entities() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn escapes_both_quote_styles() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(escape_html("café ✓ <ok>"), "café ✓ &lt;ok&gt;");
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
    }
}
