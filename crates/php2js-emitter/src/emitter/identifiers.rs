use super::Printer;
use crate::error::EmitError;
use php2js_parser::Node;

/// Rename an identifier for JavaScript: `__construct` becomes `constructor`,
/// everything else is unchanged.
pub fn rename_identifier(name: &str) -> &str {
    match name {
        "__construct" => "constructor",
        _ => name,
    }
}

impl<'a> Printer<'a> {
    // =========================================================================
    // Names
    // =========================================================================

    /// A name passes through only if it is a single unqualified segment.
    pub(super) fn emit_name(
        &self,
        parts: &[String],
        fully_qualified: bool,
        node: &Node,
    ) -> Result<String, EmitError> {
        match parts {
            [part] if !fully_qualified => Ok(part.clone()),
            _ => {
                let joined = parts.join("\\");
                let name = if fully_qualified {
                    format!("\\{joined}")
                } else {
                    joined
                };
                Err(EmitError::UnsupportedNameShape {
                    name,
                    span: node.span,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/identifiers_tests.rs"]
mod tests;
