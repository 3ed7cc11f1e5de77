use pulldown_cmark::{Options, Parser, html};

use super::DocumentParser;
use crate::error::ParseError;
use crate::render::{RenderOptions, render_html};

/// CommonMark (plus strikethrough) rendered through the HTML pipeline.
#[derive(Debug, Clone, Default)]
pub struct MarkdownParser {
    options: RenderOptions,
}

impl MarkdownParser {
    pub const NAME: &'static str = "markdown";
    pub const EXTENSIONS: &'static [&'static str] = &[".md", ".markdown"];

    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The intermediate HTML for `content`.
    pub fn to_html(&self, content: &str) -> Result<String, ParseError> {
        let parser = Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH);
        let mut out = String::with_capacity(content.len() * 3 / 2);
        html::write_html_fmt(&mut out, parser).map_err(|e| ParseError::Conversion {
            parser: Self::NAME,
            message: e.to_string(),
        })?;
        Ok(out)
    }
}

impl DocumentParser for MarkdownParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn extensions(&self) -> &'static [&'static str] {
        Self::EXTENSIONS
    }

    fn parse(&self, content: &str) -> Result<String, ParseError> {
        let html = self.to_html(content)?;
        Ok(render_html(&html, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::strip_ansi;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        strip_ansi(&MarkdownParser::default().parse(markdown).unwrap())
    }

    #[test]
    fn test_to_html_emits_language_class() {
        let html = MarkdownParser::default()
            .to_html("```rust\nfn main() {}\n```\n")
            .unwrap();
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn test_title_and_bold_paragraph() {
        let out = MarkdownParser::default()
            .parse("# Title\n\nSome **bold** text.")
            .unwrap();

        assert_eq!(strip_ansi(&out), "Title\n\nSome bold text.\n");
        assert!(out.contains(&format!("Some {} text.\n", crate::style::bold("bold"))));
        assert!(out.ends_with("text.\n"));
    }

    #[test]
    fn test_fenced_code_with_language() {
        let out = render("```rust\nfn main() {}\n```\n");
        assert_eq!(
            out,
            "┌─ rust ───────┐\n│ fn main() {} │\n└──────────────┘\n"
        );
    }

    #[test]
    fn test_indented_code_block() {
        let out = render("    a < b\n");
        assert_eq!(out, "┌───────┐\n│ a < b │\n└───────┘\n");
    }

    #[test]
    fn test_blockquote() {
        let out = render("> quoted\n> text\n\nafter");
        assert_eq!(out, "│ quoted\n│ text\n\nafter\n");
    }

    #[test]
    fn test_lists() {
        let out = render("- one\n- two\n\n1. first\n2. second\n");
        assert_eq!(out, "• one\n• two\n\n1. first\n2. second\n");
    }

    #[test]
    fn test_entities_in_text() {
        let out = render("Use &lt;b&gt; & \"quotes\"");
        assert_eq!(out, "Use <b> & \"quotes\"\n");
    }

    #[test]
    fn test_strikethrough_and_emphasis() {
        let out = render("~~gone~~ and *kept*");
        assert_eq!(out, "gone and kept\n");
    }

    #[test]
    fn test_link_label_only_in_hyperlink_mode() {
        let out = render("[docs](https://example.com)");
        assert_eq!(out, "docs\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(""), "\n");
    }
}
