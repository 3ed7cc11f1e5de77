//! Inline rules: code spans, bold, italic, strikethrough, links and line breaks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::RenderOptions;
use super::cleanup::strip_tags;
use crate::style::{self, LinkStyle};

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<code(?:\s[^>]*)?>(.*?)</code>").expect("valid regex"));
static STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:strong|b)(?:\s[^>]*)?>(.*?)</(?:strong|b)>").expect("valid regex")
});
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:em|i)(?:\s[^>]*)?>(.*?)</(?:em|i)>").expect("valid regex")
});
static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:del|s)(?:\s[^>]*)?>(.*?)</(?:del|s)>").expect("valid regex")
});
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<a\s[^>]*?href="([^"]*)"[^>]*>(.*?)</a>"#).expect("valid regex")
});
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br(?:\s[^>]*)?/?>\n?").expect("valid regex"));

pub fn render_inline(html: &str, options: &RenderOptions) -> String {
    let theme = &options.theme;

    let html = CODE_SPAN.replace_all(html, |caps: &Captures| {
        theme.code_span(&caps[1], options.code_span_style)
    });
    let html = STRONG.replace_all(&html, |caps: &Captures| style::bold(&caps[1]));
    let html = EMPHASIS.replace_all(&html, |caps: &Captures| style::italic(&caps[1]));
    let html = STRIKETHROUGH.replace_all(&html, |caps: &Captures| style::crossed_out(&caps[1]));
    let html = LINK.replace_all(&html, |caps: &Captures| {
        render_link(&caps[1], &caps[2], options)
    });
    LINE_BREAK.replace_all(&html, "\n").into_owned()
}

/// `href` is taken as it appears in the HTML attribute and decoded here, since
/// cleanup only knows a handful of entities.
pub fn render_link(href: &str, text: &str, options: &RenderOptions) -> String {
    let href = html_escape::decode_html_entities(href);
    let label = options.theme.link_label(&strip_tags(text));
    match options.link_style {
        LinkStyle::Hyperlink => style::hyperlink(&href, &label),
        LinkStyle::Plain => format!("{label} ({href})"),
    }
}
