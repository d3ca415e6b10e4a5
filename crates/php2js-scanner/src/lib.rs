//! PHP scanner/tokenizer for the php2js translator.
//!
//! This crate provides the lexical analysis phase of the bundled PHP parser:
//! - `SyntaxKind` - Token types (logos lexer)
//! - `tokenize` - Whole-file tokenization, including inline HTML and
//!   `<?php` / `?>` tag handling
//!
//! The translation engine itself never depends on this crate; it only
//! consumes the syntax tree built by `php2js-parser`.

pub mod syntax_kind;
pub use syntax_kind::{LexError, SyntaxKind};

pub mod scanner;
pub use scanner::{ScanError, Token, tokenize};
