//! Box-drawing layout for fenced code blocks.
//!
//! ```text
//! ┌─ rust ───────┐
//! │ fn main() {} │
//! └──────────────┘
//! ```

use unicode_width::UnicodeWidthStr;

use super::RenderOptions;

const HORIZONTAL: &str = "─";

/// Measured geometry of one code block, computed fresh per block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockLayout {
    pub language: Option<String>,
    /// Decoded source lines, tabs expanded.
    pub lines: Vec<String>,
    pub content_width: usize,
    pub label_width: usize,
    pub inner_width: usize,
}

impl CodeBlockLayout {
    /// `code` is the raw HTML-escaped content of a `<code>` element.
    pub fn new(code: &str, language: Option<&str>, tab_width: usize) -> Self {
        let decoded = html_escape::decode_html_entities(code);
        let expanded = decoded.replace('\t', &" ".repeat(tab_width));
        let lines: Vec<String> = expanded.trim().lines().map(str::to_string).collect();

        let language = language
            .map(|lang| html_escape::decode_html_entities(lang.trim()).into_owned())
            .filter(|lang| !lang.is_empty());

        let content_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
        let label_width = language.as_deref().map_or(0, |lang| label(lang).width());
        let inner_width = content_width.max(label_width);

        Self {
            language,
            lines,
            content_width,
            label_width,
            inner_width,
        }
    }

    pub fn top_border(&self) -> String {
        match &self.language {
            Some(lang) => format!(
                "┌{}{}┐",
                label(lang),
                HORIZONTAL.repeat(self.inner_width - self.label_width + 2)
            ),
            None => format!("┌{}┐", HORIZONTAL.repeat(self.inner_width + 2)),
        }
    }

    pub fn bottom_border(&self) -> String {
        format!("└{}┘", HORIZONTAL.repeat(self.inner_width + 2))
    }

    /// Spaces needed after `line` to reach the inner width.
    pub fn padding(&self, line: &str) -> usize {
        self.inner_width.saturating_sub(line.width())
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        let frame = |border: &str| options.theme.frame(border);
        let mut out = format!("\n{}\n", frame(&self.top_border()));
        for line in &self.lines {
            // Re-escaped so the cleanup pass decodes it exactly once and never
            // takes code text for a tag.
            let escaped = html_escape::encode_text(line);
            out.push_str(&format!(
                "{}{}{}{}\n",
                frame("│ "),
                options.theme.code(&escaped),
                " ".repeat(self.padding(line)),
                frame(" │")
            ));
        }
        out.push_str(&frame(&self.bottom_border()));
        out.push_str("\n\n");
        out
    }
}

fn label(language: &str) -> String {
    format!("{HORIZONTAL} {language} {HORIZONTAL}")
}

/// Lay out and render a code block in one step.
pub fn render_code_block(code: &str, language: Option<&str>, options: &RenderOptions) -> String {
    let layout = CodeBlockLayout::new(code, language, options.tab_width);
    log::debug!(
        "code block: {} lines, language {:?}, inner width {}",
        layout.lines.len(),
        layout.language,
        layout.inner_width
    );
    layout.render(options)
}
