//! Interchange to markup conversion
//!
//! Rendering is delegated to pulldown-cmark. CommonMark has no failure mode
//! for plain text, so anything that does not parse as structure comes out as
//! literal paragraph content.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to the store's rich markup
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_becomes_heading_tag() {
        let html = markdown_to_html("## Status");
        assert!(html.contains("<h2>Status</h2>"));
    }

    #[test]
    fn test_emphasis_becomes_inline_tags() {
        let html = markdown_to_html("**bold** and *italic*");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_list_becomes_list_tags() {
        let html = markdown_to_html("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
    }

    #[test]
    fn test_link_carries_target() {
        let html = markdown_to_html("[docs](https://example.com)");
        assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let html = markdown_to_html("just words");
        assert!(html.contains("<p>just words</p>"));
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(markdown_to_html(""), "");
    }
}
