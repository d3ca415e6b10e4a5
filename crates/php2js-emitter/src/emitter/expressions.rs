use super::Printer;
use crate::error::EmitError;
use php2js_parser::{Node, NodeKind};

impl<'a> Printer<'a> {
    // =========================================================================
    // Calls
    // =========================================================================

    /// `target.method(args)`
    pub(super) fn emit_method_call(
        &mut self,
        target: &Node,
        method: &Node,
        args: &[Node],
        node: &Node,
    ) -> Result<String, EmitError> {
        let target = self.emit(target)?;
        let method = self.emit_member_name(method, node)?;
        let args = self.emit_list(args, ", ")?;
        Ok(format!("{target}.{method}({args})"))
    }

    /// `name(args)`
    pub(super) fn emit_function_call(
        &mut self,
        name: &Node,
        args: &[Node],
    ) -> Result<String, EmitError> {
        let name = self.emit(name)?;
        let args = self.emit_list(args, ", ")?;
        Ok(format!("{name}({args})"))
    }

    /// `(new Class(args))`, parenthesized so a following `.member` or call
    /// binds to the new object.
    pub(super) fn emit_new(&mut self, class: &Node, args: &[Node]) -> Result<String, EmitError> {
        let class = self.emit(class)?;
        let args = self.emit_list(args, ", ")?;
        Ok(format!("(new {class}({args}))"))
    }

    // =========================================================================
    // Member access
    // =========================================================================

    /// `base[index]`; `$list[]` has no JavaScript counterpart.
    pub(super) fn emit_array_dim_fetch(
        &mut self,
        base: &Node,
        index: Option<&Node>,
        node: &Node,
    ) -> Result<String, EmitError> {
        let Some(index) = index else {
            return Err(EmitError::MissingArrayIndex { span: node.span });
        };
        let base = self.emit(base)?;
        let index = self.emit(index)?;
        Ok(format!("{base}[{index}]"))
    }

    /// `base.property`
    pub(super) fn emit_property_fetch(
        &mut self,
        base: &Node,
        property: &Node,
        node: &Node,
    ) -> Result<String, EmitError> {
        let base = self.emit(base)?;
        let property = self.emit_member_name(property, node)?;
        Ok(format!("{base}.{property}"))
    }

    /// The name after `->`. Only a plain identifier has a `.name` form;
    /// `$o->$name` and `$o->{'a-b'}` pick the member at run time.
    fn emit_member_name(&mut self, member: &Node, access: &Node) -> Result<String, EmitError> {
        match member.kind {
            NodeKind::Identifier { .. } => self.emit(member),
            _ => Err(self.unsupported(&format!("{}_Dynamic", access.kind_name()), access)),
        }
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// `target = value` / `target += value`
    pub(super) fn emit_assignment(
        &mut self,
        target: &Node,
        operator: &str,
        value: &Node,
    ) -> Result<String, EmitError> {
        let target = self.emit(target)?;
        let value = self.emit(value)?;
        Ok(format!("{target} {operator} {value}"))
    }

    /// `left . right` becomes `left + right`. Only string operands keep their
    /// meaning; nothing coerces the others.
    pub(super) fn emit_concat(&mut self, left: &Node, right: &Node) -> Result<String, EmitError> {
        let left = self.emit(left)?;
        let right = self.emit(right)?;
        Ok(format!("{left} + {right}"))
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// `(params) => body`
    pub(super) fn emit_arrow_function(
        &mut self,
        params: &[Node],
        body: &Node,
    ) -> Result<String, EmitError> {
        let params = self.emit_list(params, ", ")?;
        let body = self.emit(body)?;
        Ok(format!("({params}) => {body}"))
    }

    /// `function(params){\nstmts\n}`. `use` bindings need no output: a
    /// JavaScript function sees its enclosing scope.
    pub(super) fn emit_closure(
        &mut self,
        params: &[Node],
        stmts: &[Node],
    ) -> Result<String, EmitError> {
        let params = self.emit_list(params, ", ")?;
        let body = self.emit_list(stmts, "\n")?;
        Ok(format!("function({params}){{\n{body}\n}}"))
    }
}
