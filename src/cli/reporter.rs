use colored::Colorize;

use crate::driver::ConvertError;

/// Renders conversion errors for the terminal.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, errors: &[ConvertError]) -> String {
        errors
            .iter()
            .map(|error| self.format_error(error))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `file:line:col - error: message`, followed by the offending source
    /// line with the node underlined when the line is known.
    pub fn format_error(&self, error: &ConvertError) -> String {
        let mut output = String::new();
        if let Some(location) = self.format_location(error) {
            output.push_str(&location);
            output.push_str(" - ");
        }
        output.push_str(&self.format_category());
        output.push_str(": ");
        output.push_str(&message(error));

        if let Some(snippet) = self.format_snippet(error) {
            output.push_str(&snippet);
        }
        output
    }

    fn format_location(&self, error: &ConvertError) -> Option<String> {
        let file = error.file()?;
        let location = match error.location() {
            Some(location) => format!("{file}:{location}"),
            None => file.to_string(),
        };
        if self.color {
            Some(location.cyan().to_string())
        } else {
            Some(location)
        }
    }

    fn format_category(&self) -> String {
        if self.color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        }
    }

    /// Source line plus a `~` underline below the node:
    ///
    /// ```text
    ///     4   echo $total;
    ///         ~~~~~~~~~~~~
    /// ```
    fn format_snippet(&self, error: &ConvertError) -> Option<String> {
        let line_text = error.line_text()?;
        let location = error.location()?;
        let span = error.span()?;

        let column = location.column.saturating_sub(1) as usize;
        let mut underline = String::new();
        let mut covered = 0usize;
        for (i, ch) in line_text.chars().enumerate() {
            let width = if ch == '\t' { 4 } else { 1 };
            if i < column {
                underline.push_str(&" ".repeat(width));
            } else if covered < span.len() as usize {
                underline.push_str(&"~".repeat(width));
                covered += ch.len_utf8();
            } else {
                break;
            }
        }
        if !underline.contains('~') {
            underline.push('~');
        }

        let line_text = line_text.replace('\t', "    ");
        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        Some(format!(
            "\n  {:>3}   {}\n        {}",
            location.line, line_text, underline
        ))
    }
}

/// The error message without the file and location prefix.
fn message(error: &ConvertError) -> String {
    match error {
        ConvertError::Io { .. } => error.to_string(),
        ConvertError::Parse { error, .. } => format!("parse error: {error}"),
        ConvertError::Emit { error, .. } => error.to_string(),
        ConvertError::AstJson { error, .. } => format!("invalid AST dump: {error}"),
    }
}
