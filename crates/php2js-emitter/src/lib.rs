//! PHP-to-JavaScript emitter for the php2js translator.
//!
//! This crate provides:
//! - `Printer` - The dispatcher: one exhaustive `match` over [`NodeKind`]
//!   with literal, identifier, expression and statement rules split across
//!   modules
//! - `EmitContext` - Per-call context (file name, source text)
//! - `EmitError` - Why a tree could not be translated
//!
//! Translation is all-or-nothing: the first node without a rule aborts the
//! whole walk.
//!
//! [`NodeKind`]: php2js_parser::NodeKind

pub mod context;
pub use context::EmitContext;

pub mod error;
pub use error::EmitError;

pub mod emitter;
pub use emitter::{Printer, escape_string, format_float, rename_identifier};

use php2js_parser::Node;

/// Translate top-level statements into one JavaScript document.
pub fn emit_program(stmts: &[Node], ctx: EmitContext<'_>) -> Result<String, EmitError> {
    Printer::new(ctx).emit_program(stmts)
}
