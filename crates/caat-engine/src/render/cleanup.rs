//! Final pass: residual tags, entities and vertical whitespace.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Decoded in this order. `&amp;` is last so `&amp;lt;` yields `&lt;`, not `<`.
const ENTITIES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

pub fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, &(entity, decoded)| {
            acc.replace(entity, decoded)
        })
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

/// Tags are stripped before entities are decoded, so escaped markup such as
/// `&lt;b&gt;` survives as literal `<b>`.
pub fn cleanup(text: &str) -> String {
    let text = strip_tags(text);
    let text = decode_entities(&text);
    let text = collapse_blank_lines(&text);
    format!("{}\n", text.trim())
}
