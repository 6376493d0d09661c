mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedConfig;

/// Parse a router config document into a [`ParsedConfig`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid router config.
pub fn parse(input: &str) -> Result<ParsedConfig, ParseError> {
    use winnow::Parser;
    grammar::parse_config.parse(input).map_err(|e| {
        let consumed = input.get(..e.offset()).unwrap_or(input);
        let line = consumed.matches('\n').count() + 1;
        let mut message = e.inner().to_string();
        if message.is_empty() {
            message = "unexpected input".to_owned();
        }
        ParseError::new(line, message)
    })
}
