//! Markdown rendering for chat messages
//!
//! Messages are converted with `pulldown-cmark` and the resulting HTML is
//! passed through `ammonia`, so raw HTML or `javascript:` links inside an
//! answer never reach the DOM unsanitized.

use pulldown_cmark::{html, Options, Parser};

/// Render markdown to sanitized HTML suitable for `inner_html`
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut unsafe_html = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut unsafe_html, parser);

    ammonia::clean(&unsafe_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_markdown("**Clause 4** applies.");
        assert!(html.contains("<strong>Clause 4</strong>"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_lists_and_tables() {
        let html = render_markdown("- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_script_is_stripped() {
        let html = render_markdown("hi <script>alert(1)</script> [x](javascript:alert(1))");
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
