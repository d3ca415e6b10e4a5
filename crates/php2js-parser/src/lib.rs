//! PHP subset parser and syntax tree for the php2js translator.
//!
//! This crate provides:
//! - `ast` - The node model (`Node`, `NodeKind`, `Modifiers`)
//! - `ParserState` - Recursive-descent parser over `php2js-scanner` tokens
//! - `json` - Reader for the JSON AST dumps produced by nikic/php-parser
//!   (`php-parse --json-dump`)
//!
//! Both frontends produce the same tree; the emitter does not care which one
//! built it.

pub mod ast;
pub use ast::{Modifiers, Node, NodeKind};

pub mod error;
pub use error::ParseError;

pub mod parser;
pub use parser::{ParserState, parse_source};

pub mod json;
pub use json::parse_ast_json;
