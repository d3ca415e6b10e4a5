use super::Printer;
use crate::error::EmitError;
use php2js_parser::Node;

/// Quote a string value for JavaScript.
///
/// Only the quote character is escaped. Backslashes, control characters and
/// non-ASCII text are copied as they are.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// A float in JavaScript syntax. A literal too large for `f64` (`1e999`)
/// is infinite, which JavaScript spells `Infinity`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

impl<'a> Printer<'a> {
    // =========================================================================
    // Arrays
    // =========================================================================

    /// `[a, b, k: v]`; a skipped slot becomes `null`.
    pub(super) fn emit_array(&mut self, items: &[Option<Node>]) -> Result<String, EmitError> {
        let parts = items
            .iter()
            .map(|item| match item {
                Some(item) => self.emit(item),
                None => Ok("null".to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("[{}]", parts.join(", ")))
    }

    pub(super) fn emit_array_item(
        &mut self,
        key: Option<&Node>,
        value: &Node,
    ) -> Result<String, EmitError> {
        let value = self.emit(value)?;
        match key {
            Some(key) => Ok(format!("{}: {}", self.emit(key)?, value)),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/literals_tests.rs"]
mod tests;
