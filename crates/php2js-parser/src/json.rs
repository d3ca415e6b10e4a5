//! Reader for nikic/php-parser JSON AST dumps.
//!
//! `php-parse --json-dump file.php` (or `json_encode($stmts)`) produces an
//! array of statement objects, each carrying a `nodeType` plus its
//! sub-nodes. Both the 4.x and 5.x node names are accepted
//! (`Scalar_LNumber`/`Scalar_Int`, `Stmt_PropertyProperty`/`PropertyItem`,
//! `Name.parts`/`Name.name`, ...).
//!
//! Node types without a translation rule become [`NodeKind::Other`] with the
//! dump's type name; their sub-nodes are not read.

use crate::ast::{Modifiers, Node, NodeKind};
use crate::error::ParseError;
use php2js_common::Span;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Read a php-parser JSON dump into top-level statements.
pub fn parse_ast_json(json: &str) -> Result<Vec<Node>, ParseError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|err| ParseError::new(format!("invalid AST JSON: {err}"), Span::dummy()))?;
    let stmts = value.as_array().ok_or_else(|| {
        ParseError::new(
            "invalid AST JSON: expected an array of statements",
            Span::dummy(),
        )
    })?;

    let nodes = stmts.iter().map(read_node).collect::<Result<Vec<_>, _>>()?;
    debug!(statements = nodes.len(), "read AST dump");
    Ok(nodes)
}

/// `startFilePos`/`endFilePos` are inclusive byte offsets; they are only
/// present when the dump was produced with file positions enabled.
fn read_span(fields: &Map<String, Value>) -> Span {
    let attributes = fields.get("attributes").and_then(Value::as_object);
    let pos = |key: &str| {
        attributes
            .and_then(|attrs| attrs.get(key))
            .and_then(Value::as_i64)
            .and_then(|n| u32::try_from(n).ok())
    };
    match (pos("startFilePos"), pos("endFilePos")) {
        (Some(start), Some(end)) if end >= start => Span::new(start, end.saturating_add(1)),
        _ => Span::dummy(),
    }
}

/// One JSON object being read as a node.
struct JsonNode<'v> {
    node_type: &'v str,
    fields: &'v Map<String, Value>,
    span: Span,
}

impl<'v> JsonNode<'v> {
    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(
            format!("{} in {}", message.into(), self.node_type),
            self.span,
        )
    }

    /// A sub-node field; JSON `null` counts as absent.
    fn field(&self, name: &str) -> Option<&'v Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    fn node(&self, name: &str) -> Result<Node, ParseError> {
        match self.field(name) {
            Some(value) => read_node(value),
            None => Err(self.error(format!("missing `{name}`"))),
        }
    }

    fn opt_node(&self, name: &str) -> Result<Option<Box<Node>>, ParseError> {
        self.field(name)
            .map(|value| read_node(value).map(Node::boxed))
            .transpose()
    }

    fn array(&self, name: &str) -> Result<&'v Vec<Value>, ParseError> {
        self.field(name)
            .and_then(Value::as_array)
            .ok_or_else(|| self.error(format!("expected `{name}` to be an array")))
    }

    fn nodes(&self, name: &str) -> Result<Vec<Node>, ParseError> {
        self.array(name)?.iter().map(read_node).collect()
    }

    fn string(&self, name: &str) -> Result<&'v str, ParseError> {
        self.field(name)
            .and_then(Value::as_str)
            .ok_or_else(|| self.error(format!("expected `{name}` to be a string")))
    }

    fn flag(&self, name: &str) -> bool {
        self.field(name).and_then(Value::as_bool).unwrap_or(false)
    }

    fn modifiers(&self) -> Modifiers {
        let bits = self
            .field("flags")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0);
        Modifiers::from_bits_truncate(bits)
    }

    fn reject_flag(&self, name: &str, what: &str) -> Result<(), ParseError> {
        if self.flag(name) {
            return Err(self.error(format!("{what} are not supported")));
        }
        Ok(())
    }

    /// `Name.name` ("A\\B") in 5.x, `Name.parts` (["A", "B"]) in 4.x.
    fn name_parts(&self) -> Result<Vec<String>, ParseError> {
        if let Some(parts) = self.field("parts").and_then(Value::as_array) {
            return parts
                .iter()
                .map(|part| {
                    part.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.error("expected name parts to be strings"))
                })
                .collect();
        }
        Ok(self.string("name")?.split('\\').map(str::to_string).collect())
    }
}

fn read_node(value: &Value) -> Result<Node, ParseError> {
    let fields = value.as_object().ok_or_else(|| {
        ParseError::new("invalid AST JSON: expected a node object", Span::dummy())
    })?;
    let span = read_span(fields);
    let node_type = fields
        .get("nodeType")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::new("invalid AST JSON: node without `nodeType`", span))?;
    let n = JsonNode {
        node_type,
        fields,
        span,
    };
    trace!(node_type, "reading node");

    let kind = match node_type {
        // === Statements ===
        "Stmt_Expression" => NodeKind::Expression {
            expr: n.node("expr")?.boxed(),
        },
        "Stmt_Return" => NodeKind::Return {
            expr: n.opt_node("expr")?,
        },
        "Stmt_Namespace" => NodeKind::Namespace {
            name: n.opt_node("name")?,
            stmts: n.nodes("stmts")?,
        },
        "Stmt_Class" => {
            let implements = n.field("implements").and_then(Value::as_array);
            if n.field("extends").is_some() || implements.is_some_and(|list| !list.is_empty()) {
                return Err(n.error("class inheritance is not supported"));
            }
            NodeKind::Class {
                name: n.opt_node("name")?,
                namespaced_name: n.opt_node("namespacedName")?,
                members: n.nodes("stmts")?,
            }
        }
        "Stmt_Property" => NodeKind::Property {
            modifiers: n.modifiers(),
            props: n.nodes("props")?,
        },
        "PropertyItem" | "Stmt_PropertyProperty" => NodeKind::PropertyItem {
            name: n.node("name")?.boxed(),
            default: n.opt_node("default")?,
        },
        "Stmt_ClassMethod" => {
            n.reject_flag("byRef", "by-reference returns")?;
            let body = match n.field("stmts") {
                Some(_) => Some(n.nodes("stmts")?),
                None => None,
            };
            NodeKind::ClassMethod {
                modifiers: n.modifiers(),
                name: n.node("name")?.boxed(),
                params: n.nodes("params")?,
                body,
            }
        }

        // === Expressions ===
        "Expr_MethodCall" => NodeKind::MethodCall {
            target: n.node("var")?.boxed(),
            method: n.node("name")?.boxed(),
            args: n.nodes("args")?,
        },
        "Expr_FuncCall" => NodeKind::FunctionCall {
            name: n.node("name")?.boxed(),
            args: n.nodes("args")?,
        },
        "Expr_New" => {
            let is_anonymous = n
                .field("class")
                .and_then(|class| class.get("nodeType"))
                .and_then(Value::as_str)
                == Some("Stmt_Class");
            if is_anonymous {
                return Err(n.error("anonymous classes are not supported"));
            }
            NodeKind::New {
                class: n.node("class")?.boxed(),
                args: n.nodes("args")?,
            }
        }
        "Expr_ArrayDimFetch" => NodeKind::ArrayDimFetch {
            base: n.node("var")?.boxed(),
            index: n.opt_node("dim")?,
        },
        "Expr_PropertyFetch" => NodeKind::PropertyFetch {
            base: n.node("var")?.boxed(),
            property: n.node("name")?.boxed(),
        },
        "Expr_Assign" => NodeKind::Assign {
            target: n.node("var")?.boxed(),
            value: n.node("expr")?.boxed(),
        },
        "Expr_AssignOp_Plus" => NodeKind::AssignAdd {
            target: n.node("var")?.boxed(),
            value: n.node("expr")?.boxed(),
        },
        "Expr_BinaryOp_Concat" => NodeKind::Concat {
            left: n.node("left")?.boxed(),
            right: n.node("right")?.boxed(),
        },
        "Expr_ArrowFunction" => {
            n.reject_flag("byRef", "by-reference returns")?;
            NodeKind::ArrowFunction {
                params: n.nodes("params")?,
                body: n.node("expr")?.boxed(),
            }
        }
        "Expr_Closure" => {
            n.reject_flag("byRef", "by-reference returns")?;
            NodeKind::Closure {
                params: n.nodes("params")?,
                uses: n.nodes("uses")?,
                stmts: n.nodes("stmts")?,
            }
        }
        "Expr_ClosureUse" | "ClosureUse" => {
            // A binding is just its variable.
            n.reject_flag("byRef", "by-reference closure bindings")?;
            return n.node("var");
        }
        "Expr_Array" => {
            let items = n
                .array("items")?
                .iter()
                .map(|item| {
                    if item.is_null() {
                        Ok(None)
                    } else {
                        read_node(item).map(Some)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            NodeKind::Array { items }
        }
        "ArrayItem" | "Expr_ArrayItem" => {
            n.reject_flag("byRef", "by-reference array items")?;
            n.reject_flag("unpack", "array unpacking")?;
            NodeKind::ArrayItem {
                key: n.opt_node("key")?,
                value: n.node("value")?.boxed(),
            }
        }
        "Arg" => {
            n.reject_flag("byRef", "by-reference arguments")?;
            n.reject_flag("unpack", "argument unpacking")?;
            if n.field("name").is_some() {
                return Err(n.error("named arguments are not supported"));
            }
            NodeKind::Argument {
                value: n.node("value")?.boxed(),
            }
        }
        "Param" => {
            n.reject_flag("byRef", "by-reference parameters")?;
            n.reject_flag("variadic", "variadic parameters")?;
            if n.field("default").is_some() {
                return Err(n.error("parameter default values are not supported"));
            }
            if !n.modifiers().is_empty() {
                return Err(n.error("constructor property promotion is not supported"));
            }
            NodeKind::Parameter {
                var: n.node("var")?.boxed(),
            }
        }
        "Expr_Variable" => match n.field("name").and_then(Value::as_str) {
            Some(name) => NodeKind::Variable {
                name: name.to_string(),
            },
            None => return Err(n.error("variable variables are not supported")),
        },
        "Expr_ConstFetch" => NodeKind::ConstFetch {
            name: n.node("name")?.boxed(),
        },

        // === Literals and names ===
        "Scalar_Int" | "Scalar_LNumber" => NodeKind::Int {
            value: n
                .field("value")
                .and_then(Value::as_i64)
                .ok_or_else(|| n.error("expected an integer `value`"))?,
        },
        "Scalar_Float" | "Scalar_DNumber" => NodeKind::Float {
            value: n
                .field("value")
                .and_then(Value::as_f64)
                .ok_or_else(|| n.error("expected a numeric `value`"))?,
        },
        "Scalar_String" => NodeKind::String {
            value: n.string("value")?.to_string(),
        },
        "Identifier" | "VarLikeIdentifier" => NodeKind::Identifier {
            name: n.string("name")?.to_string(),
        },
        "Name" | "Name_FullyQualified" => NodeKind::Name {
            parts: n.name_parts()?,
            fully_qualified: node_type == "Name_FullyQualified",
        },

        other => NodeKind::Other {
            kind: other.to_string(),
            children: Vec::new(),
        },
    };

    Ok(Node::new(kind, span))
}
