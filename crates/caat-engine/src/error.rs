#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source-to-HTML stage of a parser failed.
    #[error("Error parsing {parser}: {message}")]
    Conversion {
        parser: &'static str,
        message: String,
    },
}
