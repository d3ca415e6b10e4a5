//! Per-call emit context.

use php2js_common::Span;

/// What the printer knows about the file it is translating.
///
/// One context belongs to one translation call and is owned by its
/// [`Printer`](crate::Printer); nothing is shared between calls, so
/// independent files can be translated on different threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitContext<'a> {
    /// Display name of the input, for diagnostics.
    pub file_name: &'a str,
    /// Full source text, when the tree was parsed from PHP source.
    /// JSON AST dumps have none.
    pub source_text: Option<&'a str>,
}

impl<'a> EmitContext<'a> {
    pub fn new(file_name: &'a str) -> Self {
        EmitContext {
            file_name,
            source_text: None,
        }
    }

    pub fn with_source(file_name: &'a str, source_text: &'a str) -> Self {
        EmitContext {
            file_name,
            source_text: Some(source_text),
        }
    }

    /// The source text covered by `span`, if the context has source text
    /// and the span lies inside it.
    pub fn snippet(&self, span: Span) -> Option<&'a str> {
        self.source_text.and_then(|text| span.slice(text))
    }
}
