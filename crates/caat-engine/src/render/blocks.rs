//! Block-level rules: code blocks, headings, rules, paragraphs, blockquotes and lists.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::RenderOptions;
use super::cleanup::strip_tags;
use super::code_block::render_code_block;
use crate::style::dim;

static CODE_BLOCK_WITH_LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code[^>]*class="language-([^"]*)"[^>]*>(.*?)</code></pre>"#)
        .expect("valid regex")
});
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre><code[^>]*>(.*?)</code></pre>").expect("valid regex"));

static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h1(?:\s[^>]*)?>(.*?)</h1>").expect("valid regex"));
static H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h2(?:\s[^>]*)?>(.*?)</h2>").expect("valid regex"));
static H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h3(?:\s[^>]*)?>(.*?)</h3>").expect("valid regex"));
static H_MINOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h[4-6](?:\s[^>]*)?>(.*?)</h[4-6]>").expect("valid regex")
});
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<hr(?:\s[^>]*)?/?>").expect("valid regex"));
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p(?:\s[^>]*)?>(.*?)</p>").expect("valid regex"));
static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<blockquote(?:\s[^>]*)?>(.*?)</blockquote>").expect("valid regex")
});
// Lazy matches stop at the first closing tag, so nested lists are flattened
static UNORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<ul(?:\s[^>]*)?>(.*?)</ul>").expect("valid regex"));
static ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<ol(?:\s[^>]*)?>(.*?)</ol>").expect("valid regex"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<li(?:\s[^>]*)?>(.*?)</li>").expect("valid regex"));

const RULE_WIDTH: usize = 40;

/// All block rules in order, code blocks included.
pub fn render_blocks(html: &str, options: &RenderOptions) -> String {
    let html = render_code_blocks(html, options);
    render_text_blocks(&html, options)
}

pub fn render_code_blocks(html: &str, options: &RenderOptions) -> String {
    let html = CODE_BLOCK_WITH_LANGUAGE.replace_all(html, |caps: &Captures| {
        render_code_block(&caps[2], Some(&caps[1]), options)
    });
    CODE_BLOCK
        .replace_all(&html, |caps: &Captures| {
            render_code_block(&caps[1], None, options)
        })
        .into_owned()
}

/// Headings, rules, paragraphs, blockquotes and lists, in that order.
pub fn render_text_blocks(html: &str, options: &RenderOptions) -> String {
    let theme = &options.theme;

    let html = H1.replace_all(html, |caps: &Captures| {
        format!("{}\n\n", theme.heading(1, &strip_tags(&caps[1])))
    });
    let html = H2.replace_all(&html, |caps: &Captures| {
        format!("{}\n\n", theme.heading(2, &strip_tags(&caps[1])))
    });
    let html = H3.replace_all(&html, |caps: &Captures| {
        format!("{}\n", theme.heading(3, &strip_tags(&caps[1])))
    });
    let html = H_MINOR.replace_all(&html, |caps: &Captures| {
        format!("{}\n", theme.heading(4, &strip_tags(&caps[1])))
    });
    let html = RULE.replace_all(&html, |_: &Captures| {
        format!("{}\n\n", dim(&"─".repeat(RULE_WIDTH)))
    });
    let html = PARAGRAPH.replace_all(&html, |caps: &Captures| {
        format!("{}\n\n", strip_tags(&caps[1]))
    });
    let html = BLOCKQUOTE.replace_all(&html, |caps: &Captures| {
        render_blockquote(&caps[1], &theme.quote_marker("│ "))
    });
    let html = UNORDERED_LIST.replace_all(&html, |caps: &Captures| {
        render_list(&caps[1], |_| theme.bullet("• "))
    });
    ORDERED_LIST
        .replace_all(&html, |caps: &Captures| {
            render_list(&caps[1], |i| theme.ordinal(&format!("{}. ", i + 1)))
        })
        .into_owned()
}

fn render_blockquote(inner: &str, marker: &str) -> String {
    let text = strip_tags(inner);
    let lines: Vec<String> = text
        .trim()
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{marker}{line}")
            }
        })
        .collect();
    format!("\n{}\n\n", lines.join("\n"))
}

fn render_list(inner: &str, marker: impl Fn(usize) -> String) -> String {
    let items: Vec<String> = LIST_ITEM
        .captures_iter(inner)
        .enumerate()
        .map(|(i, caps)| format!("{}{}", marker(i), strip_tags(&caps[1]).trim()))
        .collect();
    if items.is_empty() {
        return String::new();
    }
    format!("{}\n\n", items.join("\n"))
}
