//! The dispatcher.
//!
//! `Printer::emit` is the single entry point every rule recurses through. It
//! matches exhaustively over [`NodeKind`]; adding a variant to the node model
//! is a compile error here until it gets a rule. `NodeKind::Other` is the
//! one deliberate gap and fails with [`EmitError::UnsupportedNodeKind`].

use crate::context::EmitContext;
use crate::error::EmitError;
use php2js_common::limits::MAX_EMIT_DEPTH;
use php2js_parser::{Node, NodeKind};
use tracing::{debug, trace};

mod expressions;
mod identifiers;
mod literals;
mod statements;

pub use identifiers::rename_identifier;
pub use literals::{escape_string, format_float};

/// Translates syntax-tree nodes into JavaScript text.
pub struct Printer<'a> {
    ctx: EmitContext<'a>,
    depth: u32,
}

impl<'a> Printer<'a> {
    pub fn new(ctx: EmitContext<'a>) -> Self {
        Printer { ctx, depth: 0 }
    }

    pub fn context(&self) -> &EmitContext<'a> {
        &self.ctx
    }

    /// Translate top-level statements, separated by a blank line.
    pub fn emit_program(&mut self, stmts: &[Node]) -> Result<String, EmitError> {
        let output = self.emit_list(stmts, "\n\n")?;
        debug!(
            file = self.ctx.file_name,
            statements = stmts.len(),
            bytes = output.len(),
            "emitted program"
        );
        Ok(output)
    }

    /// Translate each node and join the results with `separator`.
    pub fn emit_list(&mut self, nodes: &[Node], separator: &str) -> Result<String, EmitError> {
        let parts = nodes
            .iter()
            .map(|node| self.emit(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(separator))
    }

    /// Translate one node.
    pub fn emit(&mut self, node: &Node) -> Result<String, EmitError> {
        if self.depth >= MAX_EMIT_DEPTH {
            return Err(EmitError::NestingTooDeep { span: node.span });
        }
        self.depth += 1;
        let result = self.emit_node(node);
        self.depth -= 1;
        result
    }

    fn emit_node(&mut self, node: &Node) -> Result<String, EmitError> {
        trace!(kind = node.kind_name(), depth = self.depth, "emit");

        match &node.kind {
            // Fast paths: unwrap and recurse, or pass the text through.
            NodeKind::Expression { expr } => self.emit(expr),
            NodeKind::Argument { value } => self.emit(value),
            NodeKind::Parameter { var } => self.emit(var),
            NodeKind::Variable { name } => Ok(name.clone()),
            NodeKind::ConstFetch { name } => self.emit(name),
            NodeKind::Int { value } => Ok(value.to_string()),
            NodeKind::Float { value } => Ok(format_float(*value)),

            // Literals and names
            NodeKind::String { value } => Ok(escape_string(value)),
            NodeKind::Array { items } => self.emit_array(items),
            NodeKind::ArrayItem { key, value } => self.emit_array_item(key.as_deref(), value),
            NodeKind::Identifier { name } => Ok(rename_identifier(name).to_string()),
            NodeKind::Name {
                parts,
                fully_qualified,
            } => self.emit_name(parts, *fully_qualified, node),

            // Expressions
            NodeKind::MethodCall {
                target,
                method,
                args,
            } => self.emit_method_call(target, method, args, node),
            NodeKind::FunctionCall { name, args } => self.emit_function_call(name, args),
            NodeKind::New { class, args } => self.emit_new(class, args),
            NodeKind::ArrayDimFetch { base, index } => {
                self.emit_array_dim_fetch(base, index.as_deref(), node)
            }
            NodeKind::PropertyFetch { base, property } => {
                self.emit_property_fetch(base, property, node)
            }
            NodeKind::Assign { target, value } => self.emit_assignment(target, "=", value),
            NodeKind::AssignAdd { target, value } => self.emit_assignment(target, "+=", value),
            NodeKind::Concat { left, right } => self.emit_concat(left, right),
            NodeKind::ArrowFunction { params, body } => self.emit_arrow_function(params, body),
            NodeKind::Closure { params, stmts, .. } => self.emit_closure(params, stmts),

            // Statements and declarations
            NodeKind::Namespace { stmts, .. } => self.emit_list(stmts, "\n"),
            NodeKind::Class {
                name,
                namespaced_name,
                members,
            } => self.emit_class(name.as_deref(), namespaced_name.as_deref(), members, node),
            NodeKind::Property { modifiers, props } => self.emit_property(*modifiers, props),
            NodeKind::PropertyItem { name, default } => {
                self.emit_property_item(name, default.as_deref())
            }
            NodeKind::ClassMethod {
                modifiers,
                name,
                params,
                body,
            } => self.emit_class_method(*modifiers, name, params, body.as_deref()),
            NodeKind::Return { expr } => self.emit_return(expr.as_deref()),

            NodeKind::Other { kind, .. } => Err(self.unsupported(kind, node)),
        }
    }

    /// An `UnsupportedNodeKind` error for `node`.
    pub(crate) fn unsupported(&self, kind: &str, node: &Node) -> EmitError {
        debug!(
            file = self.ctx.file_name,
            kind,
            source = self.ctx.snippet(node.span).unwrap_or(""),
            "no translation rule"
        );
        EmitError::UnsupportedNodeKind {
            kind: kind.to_string(),
            span: node.span,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/printer_tests.rs"]
mod tests;
