//! Terminal styling for rendered documents.
//!
//! Every escape sequence the renderer emits for colours and attributes goes
//! through [`crossterm::style::Stylize`]. A [`Theme`] maps semantic roles
//! (heading levels, links, list markers) onto concrete colours.

use std::sync::LazyLock;

use crossterm::Command;
use crossterm::style::{
    Color, ContentStyle, SetAttributes, SetBackgroundColor, SetForegroundColor, Stylize,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Full reset, default foreground and default background.
static INNER_RESET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[(?:0|39|49)m").expect("valid regex"));

/// How `<a href>` elements are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// OSC-8 hyperlink: the label is clickable and the URL is hidden.
    #[default]
    Hyperlink,
    /// Styled label followed by the URL in parentheses.
    Plain,
}

/// How inline `<code>` spans are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSpanStyle {
    /// Dim backticks around coloured content.
    #[default]
    Backticks,
    /// Content on a solid background swatch.
    Swatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub heading1: Color,
    pub heading2: Color,
    pub heading3: Color,
    /// Levels 4 to 6.
    pub heading_minor: Color,
    pub code: Color,
    pub link: Color,
    pub bullet: Color,
    pub ordinal: Color,
    pub swatch: Color,
    /// The `│ ` prefix on blockquote lines.
    pub quote_marker: Color,
    /// Code-block borders.
    pub frame: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading1: Color::Magenta,
            heading2: Color::Cyan,
            heading3: Color::Yellow,
            heading_minor: Color::Green,
            code: Color::Cyan,
            link: Color::Blue,
            bullet: Color::Green,
            ordinal: Color::Blue,
            swatch: Color::DarkGrey,
            quote_marker: Color::DarkGrey,
            frame: Color::DarkGrey,
        }
    }
}

impl Theme {
    pub fn heading_style(&self, level: u8) -> ContentStyle {
        let style = ContentStyle::new().bold();
        match level {
            1 => style.underlined().with(self.heading1),
            2 => style.with(self.heading2),
            3 => style.with(self.heading3),
            _ => style.with(self.heading_minor),
        }
    }

    pub fn heading(&self, level: u8, text: &str) -> String {
        paint_nested(self.heading_style(level), text)
    }

    pub fn code(&self, text: &str) -> String {
        text.with(self.code).to_string()
    }

    pub fn code_span(&self, text: &str, style: CodeSpanStyle) -> String {
        match style {
            CodeSpanStyle::Backticks => {
                format!("{}{}{}", dim("`"), self.code(text), dim("`"))
            }
            CodeSpanStyle::Swatch => format!(" {text} ")
                .with(self.code)
                .on(self.swatch)
                .to_string(),
        }
    }

    pub fn link_label(&self, text: &str) -> String {
        paint_nested(ContentStyle::new().with(self.link).underlined(), text)
    }

    pub fn quote_marker(&self, marker: &str) -> String {
        marker.with(self.quote_marker).to_string()
    }

    pub fn frame(&self, border: &str) -> String {
        border.with(self.frame).dim().to_string()
    }

    pub fn bullet(&self, marker: &str) -> String {
        marker.with(self.bullet).to_string()
    }

    pub fn ordinal(&self, marker: &str) -> String {
        marker.with(self.ordinal).to_string()
    }
}

pub fn dim(text: &str) -> String {
    text.dim().to_string()
}

pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

pub fn italic(text: &str) -> String {
    text.italic().to_string()
}

pub fn crossed_out(text: &str) -> String {
    text.crossed_out().to_string()
}

/// Escape sequences that switch `style` on, without content or reset.
pub fn opening_sequence(style: &ContentStyle) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    if let Some(bg) = style.background_color {
        let _ = SetBackgroundColor(bg).write_ansi(&mut out);
    }
    if let Some(fg) = style.foreground_color {
        let _ = SetForegroundColor(fg).write_ansi(&mut out);
    }
    if !style.attributes.is_empty() {
        let _ = SetAttributes(style.attributes).write_ansi(&mut out);
    }
    out
}

/// Paints `text`, which may already hold styled spans, with `style`.
///
/// A styled span ends with a reset that would also switch off the outer style,
/// so the outer style is switched back on after each reset inside `text`.
pub fn paint_nested(style: ContentStyle, text: &str) -> String {
    let opening = opening_sequence(&style);
    let body = INNER_RESET.replace_all(text, |caps: &Captures| format!("{}{opening}", &caps[0]));
    style.apply(body).to_string()
}

/// Wraps an already styled label in an OSC-8 hyperlink envelope.
pub fn hyperlink(href: &str, label: &str) -> String {
    format!("\x1b]8;;{href}\x1b\\{label}\x1b]8;;\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::strip_ansi;

    #[test]
    fn test_heading_keeps_visible_text() {
        let theme = Theme::default();
        for level in 1..=6 {
            assert_eq!(strip_ansi(&theme.heading(level, "Title")), "Title");
        }
    }

    #[test]
    fn test_heading_level_styles() {
        let theme = Theme::default();
        // Only level 1 is underlined
        assert_ne!(theme.heading(1, "x"), theme.heading(2, "x"));
        assert_eq!(theme.heading(4, "x"), theme.heading(6, "x"));
    }

    #[test]
    fn test_code_span_backticks() {
        let theme = Theme::default();
        let rendered = theme.code_span("let x", CodeSpanStyle::Backticks);
        assert_eq!(strip_ansi(&rendered), "`let x`");
    }

    #[test]
    fn test_code_span_swatch_pads_content() {
        let theme = Theme::default();
        let rendered = theme.code_span("let x", CodeSpanStyle::Swatch);
        assert_eq!(strip_ansi(&rendered), " let x ");
    }

    #[test]
    fn test_heading_style_resumes_after_inline_span() {
        let theme = Theme::default();
        let opening = opening_sequence(&theme.heading_style(1));
        let text = format!("A {} c", bold("b"));

        let out = theme.heading(1, &text);

        // Bold and underline are switched back on before " c"
        assert!(out.contains(&format!("\x1b[0m{opening} c")), "{out:?}");
        assert!(opening.contains("\x1b[1m") && opening.contains("\x1b[4m"));
        assert_eq!(strip_ansi(&out), "A b c");
    }

    #[test]
    fn test_heading_colour_resumes_after_code_span() {
        let theme = Theme::default();
        let opening = opening_sequence(&theme.heading_style(2));
        let text = format!("A {} c", theme.code_span("b", CodeSpanStyle::Backticks));

        let out = theme.heading(2, &text);

        let tail = out.rsplit('`').next().unwrap();
        assert!(tail.contains(&format!("{opening} c")), "{out:?}");
    }

    #[test]
    fn test_link_label_resumes_after_inline_span() {
        let theme = Theme::default();
        let opening = opening_sequence(&ContentStyle::new().with(theme.link).underlined());

        let out = theme.link_label(&format!("{} docs", italic("read")));

        assert!(out.contains(&format!("\x1b[0m{opening} docs")), "{out:?}");
    }

    #[test]
    fn test_plain_text_is_painted_unchanged() {
        let theme = Theme::default();
        assert_eq!(
            theme.heading(3, "Title"),
            theme.heading_style(3).apply("Title").to_string()
        );
    }

    #[test]
    fn test_hyperlink_envelope() {
        let link = hyperlink("https://example.com", "label");
        assert!(link.starts_with("\x1b]8;;https://example.com\x1b\\"));
        assert!(link.ends_with("\x1b]8;;\x1b\\"));
        assert_eq!(strip_ansi(&link), "label");
    }
}
