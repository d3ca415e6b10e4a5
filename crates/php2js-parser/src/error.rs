//! Parse failures.

use php2js_common::Span;
use php2js_scanner::ScanError;

/// A parse failure: the source (or AST dump) could not be turned into a tree.
///
/// `span` points at the offending token; it is a dummy span for JSON input
/// that carries no file positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

impl From<ScanError> for ParseError {
    fn from(err: ScanError) -> Self {
        ParseError::new(err.to_string(), err.span())
    }
}
