use super::Printer;
use crate::error::EmitError;
use php2js_parser::{Modifiers, Node};

fn static_prefix(modifiers: Modifiers) -> &'static str {
    if modifiers.contains(Modifiers::STATIC) {
        "static "
    } else {
        ""
    }
}

impl<'a> Printer<'a> {
    // =========================================================================
    // Classes
    // =========================================================================

    /// `class Name{\nmember\nmember\n}`
    ///
    /// A resolved `namespaced_name` wins over the short name; either must be
    /// a single segment.
    pub(super) fn emit_class(
        &mut self,
        name: Option<&Node>,
        namespaced_name: Option<&Node>,
        members: &[Node],
        node: &Node,
    ) -> Result<String, EmitError> {
        let Some(name) = namespaced_name.or(name) else {
            return Err(self.unsupported(node.kind_name(), node));
        };
        let name = self.emit(name)?;
        let members = self.emit_list(members, "\n")?;
        Ok(format!("class {name}{{\n{members}\n}}"))
    }

    /// One line per declared property: `[static ]name = default`.
    pub(super) fn emit_property(
        &mut self,
        modifiers: Modifiers,
        props: &[Node],
    ) -> Result<String, EmitError> {
        let prefix = static_prefix(modifiers);
        let items = props
            .iter()
            .map(|prop| Ok(format!("{prefix}{}", self.emit(prop)?)))
            .collect::<Result<Vec<_>, EmitError>>()?;
        Ok(items.join("\n"))
    }

    /// `name = default`; a property declared without a default is `null`.
    pub(super) fn emit_property_item(
        &mut self,
        name: &Node,
        default: Option<&Node>,
    ) -> Result<String, EmitError> {
        let name = self.emit(name)?;
        let default = match default {
            Some(default) => self.emit(default)?,
            None => "null".to_string(),
        };
        Ok(format!("{name} = {default}"))
    }

    /// `[static ]name(params) {\nbody\n}`; an abstract method gets an empty body.
    pub(super) fn emit_class_method(
        &mut self,
        modifiers: Modifiers,
        name: &Node,
        params: &[Node],
        body: Option<&[Node]>,
    ) -> Result<String, EmitError> {
        let name = self.emit(name)?;
        let params = self.emit_list(params, ", ")?;
        let body = self.emit_list(body.unwrap_or_default(), "\n")?;
        Ok(format!(
            "{}{name}({params}) {{\n{body}\n}}",
            static_prefix(modifiers)
        ))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn emit_return(&mut self, expr: Option<&Node>) -> Result<String, EmitError> {
        match expr {
            Some(expr) => Ok(format!("return {}", self.emit(expr)?)),
            None => Ok("return".to_string()),
        }
    }
}
