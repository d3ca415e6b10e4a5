//! Recursive-descent parser for the PHP subset.
//!
//! The parser works over the token vector produced by `php2js-scanner`.
//! It accepts somewhat more syntax than the translator handles: constructs
//! such as `echo`, `if` or binary arithmetic are parsed into
//! [`NodeKind::Other`] so the emitter can reject them by node type. Syntax
//! whose meaning would be lost in the tree (parameter defaults, by-reference
//! markers, class inheritance, ...) is rejected here instead.

use crate::ast::{Node, NodeKind};
use crate::error::ParseError;
use php2js_common::Span;
use php2js_common::limits::MAX_PARSE_DEPTH;
use php2js_scanner::{SyntaxKind, Token, tokenize};
use tracing::debug;

mod literals;
mod state_expressions;
mod state_statements;

pub use literals::{
    parse_float_literal, parse_int_literal, unescape_double_quoted, unescape_single_quoted,
};

/// Parse a whole PHP file into its top-level statements.
pub fn parse_source(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut parser = ParserState::new(source)?;
    parser.parse_program()
}

/// Parser state: the token vector plus a cursor.
pub struct ParserState<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    /// End offset of the most recently consumed token.
    prev_end: u32,
    depth: u32,
}

impl<'a> ParserState<'a> {
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let tokens = tokenize(source)?;
        Ok(ParserState {
            source,
            tokens,
            pos: 0,
            prev_end: 0,
            depth: 0,
        })
    }

    /// Parse top-level statements until end of file.
    ///
    /// A braceless `namespace Foo;` owns every statement up to the next
    /// `namespace` declaration or the end of the file.
    pub fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut stmts = Vec::new();
        while !self.at(SyntaxKind::EndOfFile) {
            if self.eat(SyntaxKind::CloseTag) {
                continue;
            }
            if self.at(SyntaxKind::NamespaceKeyword) {
                stmts.push(self.parse_namespace()?);
                continue;
            }
            stmts.push(self.parse_statement()?);
        }
        debug!(statements = stmts.len(), "parsed program");
        Ok(stmts)
    }

    fn parse_namespace(&mut self) -> Result<Node, ParseError> {
        let start = self.expect(SyntaxKind::NamespaceKeyword)?.span;
        let name = if self.at(SyntaxKind::OpenBrace) {
            None
        } else {
            Some(self.parse_name()?.boxed())
        };

        let stmts = if self.eat(SyntaxKind::OpenBrace) {
            let stmts = self.parse_statements_until(SyntaxKind::CloseBrace)?;
            self.expect(SyntaxKind::CloseBrace)?;
            stmts
        } else {
            if name.is_none() {
                return Err(self.error_here("expected namespace name or `{`"));
            }
            self.expect_terminator()?;
            let mut stmts = Vec::new();
            while !self.at(SyntaxKind::EndOfFile) && !self.at(SyntaxKind::NamespaceKeyword) {
                if self.eat(SyntaxKind::CloseTag) {
                    continue;
                }
                stmts.push(self.parse_statement()?);
            }
            stmts
        };

        Ok(Node::new(
            NodeKind::Namespace { name, stmts },
            self.span_from(start),
        ))
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn current(&self) -> Token {
        // tokenize() always ends the vector with EndOfFile
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(SyntaxKind::EndOfFile, Span::dummy()))
    }

    fn peek_kind(&self, ahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + ahead)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EndOfFile)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().kind == kind
    }

    fn bump(&mut self) -> Token {
        let token = self.current();
        if token.kind != SyntaxKind::EndOfFile {
            self.pos += 1;
        }
        self.prev_end = token.span.end;
        token
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error_here(format!("expected {}", kind.describe())))
        }
    }

    /// `;`, or a `?>` closing tag, which terminates a statement as well.
    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.eat(SyntaxKind::Semicolon) || self.eat(SyntaxKind::CloseTag) {
            Ok(())
        } else {
            Err(self.error_here("expected `;`"))
        }
    }

    fn text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        Span::new(start.start, self.prev_end.max(start.end))
    }

    fn error_here(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        let found = match token.kind {
            SyntaxKind::EndOfFile => "end of file".to_string(),
            kind if kind.is_keyword() => kind.describe().to_string(),
            _ => format!("`{}`", self.text(token)),
        };
        ParseError::new(format!("{}, found {}", expected.into(), found), token.span)
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_PARSE_DEPTH {
            return Err(ParseError::new("nesting too deep", self.current().span));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run a chain parser whose loop calls `enter` once per link, then drop
    /// the depth back to where it was.
    fn with_chain<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        let result = parse(self);
        self.depth = depth;
        result
    }
}
