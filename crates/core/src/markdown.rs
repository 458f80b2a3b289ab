//! Markdown rendering for user-authored content.

use pulldown_cmark::{html, Parser};

/// Render CommonMark markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new(content);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_paragraph() {
        assert_eq!(render_markdown("hello world"), "<p>hello world</p>\n");
    }

    #[test]
    fn test_render_markdown_emphasis_and_links() {
        let html = render_markdown("see [the rules](/rules) for *details*");
        assert!(html.contains("<a href=\"/rules\">the rules</a>"));
        assert!(html.contains("<em>details</em>"));
    }

    #[test]
    fn test_render_markdown_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
