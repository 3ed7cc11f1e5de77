//! HTML-to-terminal rendering.
//!
//! The renderer is a fixed sequence of pure `&str -> String` stages. Each stage
//! rewrites the tags it owns and leaves everything else untouched, so a stage
//! must never produce text that a later stage would match again.
//!
//! Stage order:
//! 1. fenced code blocks (with and without a language tag)
//! 2. inline elements: code spans, bold, italic, strikethrough, links, breaks
//! 3. block elements: headings, rules, paragraphs, blockquotes, lists
//! 4. cleanup: residual tags, entities, blank-line runs
//!
//! Code blocks go first so their `<code>` element is not taken for an inline
//! code span. Inline rules run before any block rule strips structural tags so
//! styling inside headings, paragraphs and list items survives.

pub mod blocks;
pub mod cleanup;
pub mod code_block;
pub mod inline;

use serde::{Deserialize, Serialize};

use crate::style::{CodeSpanStyle, LinkStyle, Theme};

/// A single rewrite step of the pipeline.
pub type Stage = fn(&str, &RenderOptions) -> String;

/// The canonical stage order. Tests pin this list.
pub const PIPELINE: &[(&str, Stage)] = &[
    ("code_blocks", blocks::render_code_blocks),
    ("inline", inline::render_inline),
    ("text_blocks", blocks::render_text_blocks),
    ("cleanup", cleanup_stage),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub link_style: LinkStyle,
    pub code_span_style: CodeSpanStyle,
    /// Spaces substituted for each tab inside code blocks.
    pub tab_width: usize,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_style: LinkStyle::default(),
            code_span_style: CodeSpanStyle::default(),
            tab_width: 4,
            theme: Theme::default(),
        }
    }
}

/// Render an HTML string as terminal text.
pub fn render_html(html: &str, options: &RenderOptions) -> String {
    PIPELINE
        .iter()
        .fold(html.to_string(), |text, (name, stage)| {
            let next = stage(&text, options);
            log::debug!(
                "stage {name}: {} -> {} bytes",
                text.len(),
                next.len()
            );
            next
        })
}

fn cleanup_stage(text: &str, _options: &RenderOptions) -> String {
    cleanup::cleanup(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::strip_ansi;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pipeline_order_is_fixed() {
        let names: Vec<&str> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["code_blocks", "inline", "text_blocks", "cleanup"]);
    }

    #[test]
    fn test_inline_styling_survives_inside_heading() {
        let html = "<h2>Install <code>caat</code> now</h2>\n";
        let out = render_html(html, &RenderOptions::default());

        assert_eq!(strip_ansi(&out), "Install `caat` now\n");
        // The code span keeps its own escape sequences inside the heading
        assert!(out.matches('\x1b').count() > 2);
    }

    #[test]
    fn test_heading_style_resumes_after_inline_span() {
        let options = RenderOptions::default();
        let opening = crate::style::opening_sequence(&options.theme.heading_style(2));

        let out = render_html("<h2>A <strong>b</strong> c</h2>\n", &options);

        let after_span = out.split("b\x1b[0m").nth(1).unwrap();
        assert!(after_span.starts_with(&format!("{opening} c")), "{out:?}");
        assert_eq!(strip_ansi(&out), "A b c\n");
    }

    #[test]
    fn test_inline_styling_survives_inside_list_item() {
        let html = "<ul>\n<li><strong>first</strong> item</li>\n<li>second</li>\n</ul>\n";
        let out = render_html(html, &RenderOptions::default());

        assert_eq!(strip_ansi(&out), "• first item\n• second\n");
        assert!(out.contains(&crate::style::bold("first")));
    }

    #[test]
    fn test_code_block_content_is_not_restyled_as_inline_code() {
        let html = "<pre><code>let a = 1;\n</code></pre>\n";
        let out = render_html(html, &RenderOptions::default());

        assert!(!strip_ansi(&out).contains('`'));
        assert!(strip_ansi(&out).contains("│ let a = 1; │"));
    }

    #[test]
    fn test_escaped_markup_in_code_block_is_not_stripped() {
        let html = "<pre><code class=\"language-html\">&lt;b&gt;hi&lt;/b&gt;\n</code></pre>\n";
        let out = strip_ansi(&render_html(html, &RenderOptions::default()));

        assert!(out.contains("│ <b>hi</b> │"), "got: {out}");
        assert!(out.starts_with("┌─ html ─"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let html = "<p>See <a href=\"https://example.com\">docs</a></p>\n";
        let options = RenderOptions::default();
        assert_eq!(render_html(html, &options), render_html(html, &options));
    }
}
