//! Source parsers and the extension registry that selects them.

pub mod markdown;

use std::path::Path;

use crate::error::ParseError;
use crate::render::RenderOptions;
use markdown::MarkdownParser;

/// A source format that can be rendered as terminal text.
pub trait DocumentParser {
    /// Human-readable format name, used in error messages.
    fn name(&self) -> &'static str;

    /// Extensions handled by this parser, lowercase with the leading dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Render a whole document.
    fn parse(&self, content: &str) -> Result<String, ParseError>;
}

#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn DocumentParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in parser.
    pub fn with_defaults(options: RenderOptions) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarkdownParser::new(options)));
        registry
    }

    /// Earlier registrations win when extensions overlap.
    pub fn register(&mut self, parser: Box<dyn DocumentParser>) {
        self.parsers.push(parser);
    }

    pub fn for_extension(&self, extension: &str) -> Option<&dyn DocumentParser> {
        self.parsers
            .iter()
            .find(|parser| {
                parser
                    .extensions()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(extension))
            })
            .map(|parser| parser.as_ref())
    }

    pub fn for_path(&self, path: &Path) -> Option<&dyn DocumentParser> {
        let extension = extension_of(path);
        let parser = self.for_extension(&extension);
        log::debug!(
            "{}: extension {extension:?} -> {:?}",
            path.display(),
            parser.map(|parser| parser.name())
        );
        parser
    }

    /// All extensions in registration order, without duplicates.
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        let mut extensions = Vec::new();
        for extension in self.parsers.iter().flat_map(|parser| parser.extensions()) {
            if !extensions.contains(extension) {
                extensions.push(*extension);
            }
        }
        extensions
    }
}

/// Lowercased extension with its leading dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
