//! Source text -> token stream.

use crate::SyntaxKind;
use crate::syntax_kind::LexError;
use logos::Logos;
use php2js_common::Span;
use tracing::trace;

const OPEN_TAG: &[u8] = b"<?php";

/// A token with its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source).unwrap_or("")
    }
}

/// Input the scanner could not turn into a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("unrecognized input `{text}`")]
    Unrecognized { text: String, span: Span },

    /// `span` covers the opening `/*`.
    #[error("unterminated comment")]
    UnterminatedComment { span: Span },
}

impl ScanError {
    pub fn span(&self) -> Span {
        match self {
            ScanError::Unrecognized { span, .. } | ScanError::UnterminatedComment { span } => *span,
        }
    }
}

/// Tokenize a PHP file.
///
/// Text before the first `<?php` and after each `?>` becomes an `InlineHtml`
/// token; a single newline directly after `?>` is swallowed, as PHP does.
/// The returned vector always ends with `EndOfFile`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < bytes.len() {
        let code_start = memchr::memmem::find(&bytes[pos..], OPEN_TAG)
            .map(|i| pos + i)
            .unwrap_or(bytes.len());
        if code_start > pos {
            tokens.push(Token::new(SyntaxKind::InlineHtml, Span::from(pos..code_start)));
        }
        if code_start == bytes.len() {
            break;
        }

        pos = code_start + OPEN_TAG.len();
        pos = scan_code(source, pos, &mut tokens)?;
    }

    tokens.push(Token::new(
        SyntaxKind::EndOfFile,
        Span::from(bytes.len()..bytes.len()),
    ));
    trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Lex PHP code starting at `start` until `?>` or end of input.
/// Returns the offset where inline HTML resumes.
fn scan_code(source: &str, start: usize, tokens: &mut Vec<Token>) -> Result<usize, ScanError> {
    let mut lexer = SyntaxKind::lexer(&source[start..]);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::from(start + range.start..start + range.end);
        match result {
            Ok(SyntaxKind::CloseTag) => {
                tokens.push(Token::new(SyntaxKind::CloseTag, span));
                let mut resume = span.end as usize;
                if source[resume..].starts_with("\r\n") {
                    resume += 2;
                } else if source[resume..].starts_with('\n') {
                    resume += 1;
                }
                return Ok(resume);
            }
            Ok(kind) => tokens.push(Token::new(kind, span)),
            Err(LexError::Unrecognized) => {
                return Err(ScanError::Unrecognized {
                    text: lexer.slice().to_string(),
                    span,
                });
            }
            Err(LexError::UnterminatedComment) => {
                return Err(ScanError::UnterminatedComment { span });
            }
        }
    }

    Ok(source.len())
}
