//! Emit failures.

use php2js_common::Span;

/// Why a syntax tree could not be translated.
///
/// Every variant carries the span of the offending node so that callers
/// holding the source text can point at it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// The node's kind has no translation rule.
    #[error("unsupported node kind `{kind}`")]
    UnsupportedNodeKind { kind: String, span: Span },

    /// A qualified or fully-qualified name; only single-segment names exist in
    /// the output.
    #[error("unsupported name `{name}`: only single-segment names can be translated")]
    UnsupportedNameShape { name: String, span: Span },

    /// `$list[]` has no JavaScript counterpart.
    #[error("array access without an index is not supported")]
    MissingArrayIndex { span: Span },

    #[error("nesting too deep")]
    NestingTooDeep { span: Span },
}

impl EmitError {
    pub fn span(&self) -> Span {
        match self {
            EmitError::UnsupportedNodeKind { span, .. }
            | EmitError::UnsupportedNameShape { span, .. }
            | EmitError::MissingArrayIndex { span }
            | EmitError::NestingTooDeep { span } => *span,
        }
    }
}
