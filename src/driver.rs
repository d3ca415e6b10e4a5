//! Conversion entry points: file or source text in, one JavaScript document out.
//!
//! Each call parses its own tree and builds its own [`EmitContext`], so
//! calls are independent of each other and may run concurrently.

use php2js_common::limits::CONVERT_STACK_SIZE;
use php2js_common::{LineMap, Location, Span};
use php2js_emitter::{EmitContext, EmitError, emit_program};
use php2js_parser::{Node, ParseError, parse_ast_json, parse_source};
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span};

/// Why a conversion failed.
///
/// Parse and emit failures carry the 1-based location of the offending
/// node and the text of its line when the source text is known.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: parse error: {error}", at(.file, .location))]
    Parse {
        file: String,
        #[source]
        error: ParseError,
        location: Option<Location>,
        line_text: Option<String>,
    },

    #[error("{}: {error}", at(.file, .location))]
    Emit {
        file: String,
        #[source]
        error: EmitError,
        location: Option<Location>,
        line_text: Option<String>,
    },

    #[error("{file}: invalid AST dump: {error}")]
    AstJson {
        file: String,
        #[source]
        error: ParseError,
    },
}

fn at(file: &str, location: &Option<Location>) -> String {
    match location {
        Some(location) => format!("{file}:{location}"),
        None => file.to_string(),
    }
}

impl ConvertError {
    /// Display name of the input the error belongs to, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            ConvertError::Io { .. } => None,
            ConvertError::Parse { file, .. }
            | ConvertError::Emit { file, .. }
            | ConvertError::AstJson { file, .. } => Some(file),
        }
    }

    /// The source line the error points at, when known.
    pub fn line_text(&self) -> Option<&str> {
        match self {
            ConvertError::Parse { line_text, .. } | ConvertError::Emit { line_text, .. } => {
                line_text.as_deref()
            }
            _ => None,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            ConvertError::Parse { location, .. } | ConvertError::Emit { location, .. } => *location,
            _ => None,
        }
    }

    /// Byte span of the offending node in the source text.
    pub fn span(&self) -> Option<Span> {
        let span = match self {
            ConvertError::Parse { error, .. } | ConvertError::AstJson { error, .. } => error.span,
            ConvertError::Emit { error, .. } => error.span(),
            ConvertError::Io { .. } => return None,
        };
        (!span.is_dummy()).then_some(span)
    }
}

/// Location and line text of `span` in `source`.
fn locate(source: Option<&str>, span: Span) -> (Option<Location>, Option<String>) {
    let Some(source) = source.filter(|_| !span.is_dummy()) else {
        return (None, None);
    };
    let map = LineMap::build(source);
    let location = map.location(span.start, source);
    let line_text = map.line_text(location.line, source).map(str::to_string);
    (Some(location), line_text)
}

/// A rayon pool for converting many inputs at once.
///
/// Workers get [`CONVERT_STACK_SIZE`] of stack so that input nested right up
/// to the parser's depth limit fails with an error instead of overflowing.
pub fn conversion_pool() -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .stack_size(CONVERT_STACK_SIZE)
        .thread_name(|index| format!("php2js-convert-{index}"))
        .build()
}

/// Convert the PHP file at `path` to JavaScript.
///
/// Deeply nested input needs a deep stack; call this from a thread with at
/// least [`CONVERT_STACK_SIZE`] bytes of stack (see [`conversion_pool`]).
pub fn convert(path: impl AsRef<Path>) -> Result<String, ConvertError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    convert_source(&source, &path.display().to_string())
}

/// Convert PHP source text to JavaScript. `file_name` is only used in
/// diagnostics.
pub fn convert_source(source: &str, file_name: &str) -> Result<String, ConvertError> {
    let _span = debug_span!("convert", file = file_name).entered();
    let stmts = parse_php(source, file_name)?;
    emit(&stmts, EmitContext::with_source(file_name, source))
}

/// Parse PHP source text into top-level statements without translating them.
pub fn parse_php(source: &str, file_name: &str) -> Result<Vec<Node>, ConvertError> {
    let stmts = parse_source(source).map_err(|error| {
        let (location, line_text) = locate(Some(source), error.span);
        ConvertError::Parse {
            file: file_name.to_string(),
            error,
            location,
            line_text,
        }
    })?;
    debug!(statements = stmts.len(), "parsed");
    Ok(stmts)
}

/// Convert a nikic/php-parser JSON AST dump (`php-parse --json-dump`) to
/// JavaScript.
///
/// The dump carries no source text, so errors have no line text; spans
/// recorded in the dump are still reported through [`ConvertError::span`].
pub fn convert_ast_json(json: &str, file_name: &str) -> Result<String, ConvertError> {
    let _span = debug_span!("convert_ast_json", file = file_name).entered();

    let stmts = parse_ast_json(json).map_err(|error| ConvertError::AstJson {
        file: file_name.to_string(),
        error,
    })?;
    debug!(statements = stmts.len(), "read AST dump");

    emit(&stmts, EmitContext::new(file_name))
}

fn emit(stmts: &[Node], ctx: EmitContext<'_>) -> Result<String, ConvertError> {
    emit_program(stmts, ctx).map_err(|error| {
        let (location, line_text) = locate(ctx.source_text, error.span());
        ConvertError::Emit {
            file: ctx.file_name.to_string(),
            error,
            location,
            line_text,
        }
    })
}
