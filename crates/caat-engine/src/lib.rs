pub mod error;
pub mod parsers;
pub mod render;
pub mod style;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ParseError;
pub use parsers::{DocumentParser, ParserRegistry, markdown::MarkdownParser};
pub use render::{
    RenderOptions, cleanup::cleanup, code_block::render_code_block, render_html,
};
pub use style::{CodeSpanStyle, LinkStyle, Theme};
