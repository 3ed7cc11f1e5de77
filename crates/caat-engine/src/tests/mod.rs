use regex::Regex;
use std::sync::LazyLock;

static ESCAPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]|\x1b\]8;[^\x1b]*\x1b\\").unwrap()
});

/// Remove SGR and OSC-8 sequences, leaving the visible text
pub fn strip_ansi(text: &str) -> String {
    ESCAPES.replace_all(text, "").into_owned()
}
