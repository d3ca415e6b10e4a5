//! Syntax tree for the PHP subset.
//!
//! `NodeKind` is a closed union: every construct the translator has a rule
//! for gets its own variant. Constructs a parser recognises but the
//! translator does not handle are carried as [`NodeKind::Other`], tagged with
//! their nikic/php-parser node type name, so that the emitter can reject them
//! by name.

use bitflags::bitflags;
use php2js_common::Span;
use serde::Serialize;

/// A syntax-tree node: a kind plus the source span it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub span: Span,
}

bitflags! {
    /// Class member modifiers. Bit values match php-parser's
    /// `Modifiers` constants so JSON dumps can be read directly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1;
        const PROTECTED = 2;
        const PRIVATE = 4;
        const STATIC = 8;
        const ABSTRACT = 16;
        const FINAL = 32;
        const READONLY = 64;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum NodeKind {
    // === Statements ===
    /// An expression used as a statement: `$x->y();`
    Expression { expr: Box<Node> },
    /// `return;` / `return $x;`
    Return { expr: Option<Box<Node>> },
    /// `namespace Foo;` or `namespace Foo { ... }`
    Namespace {
        name: Option<Box<Node>>,
        stmts: Vec<Node>,
    },
    /// `class Foo { ... }`
    ///
    /// `namespaced_name` is only present when a name resolver has run over
    /// the tree (php-parser's `NameResolver`); the bundled parser leaves it
    /// empty.
    Class {
        name: Option<Box<Node>>,
        namespaced_name: Option<Box<Node>>,
        members: Vec<Node>,
    },
    /// `private static $a = 1, $b;`
    Property {
        modifiers: Modifiers,
        props: Vec<Node>,
    },
    /// One `$name = default` entry of a property declaration.
    PropertyItem {
        name: Box<Node>,
        default: Option<Box<Node>>,
    },
    /// `public function foo($a) { ... }`; `body` is `None` for abstract methods.
    ClassMethod {
        modifiers: Modifiers,
        name: Box<Node>,
        params: Vec<Node>,
        body: Option<Vec<Node>>,
    },

    // === Expressions ===
    /// `$target->method(args)`
    MethodCall {
        target: Box<Node>,
        method: Box<Node>,
        args: Vec<Node>,
    },
    /// `name(args)`
    FunctionCall { name: Box<Node>, args: Vec<Node> },
    /// `new Class(args)`
    New { class: Box<Node>, args: Vec<Node> },
    /// `$base[index]`; `$base[]` has no index.
    ArrayDimFetch {
        base: Box<Node>,
        index: Option<Box<Node>>,
    },
    /// `$base->property`
    PropertyFetch {
        base: Box<Node>,
        property: Box<Node>,
    },
    /// `$target = value`
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    /// `$target += value`
    AssignAdd {
        target: Box<Node>,
        value: Box<Node>,
    },
    /// `left . right`
    Concat { left: Box<Node>, right: Box<Node> },
    /// `fn ($x) => expr`
    ArrowFunction { params: Vec<Node>, body: Box<Node> },
    /// `function ($x) use ($y) { ... }`
    Closure {
        params: Vec<Node>,
        uses: Vec<Node>,
        stmts: Vec<Node>,
    },
    /// `[a, b]` / `array(a, b)`; `None` items are skipped slots (`[a, , b]`).
    Array { items: Vec<Option<Node>> },
    /// `key => value` or a positional `value` inside an array literal.
    ArrayItem {
        key: Option<Box<Node>>,
        value: Box<Node>,
    },
    /// A call argument.
    Argument { value: Box<Node> },
    /// A function/method parameter; `var` is a `Variable` node.
    Parameter { var: Box<Node> },
    /// `$name`
    Variable { name: String },
    /// A bare constant such as `null`, `true` or `PHP_EOL`.
    ConstFetch { name: Box<Node> },

    // === Literals and names ===
    Int { value: i64 },
    Float { value: f64 },
    String { value: String },
    /// A member or declaration name: method names, property names, class names.
    Identifier { name: String },
    /// A (possibly qualified) name in expression position: `strlen`, `Foo\Bar`, `\Baz`.
    Name {
        parts: Vec<String>,
        fully_qualified: bool,
    },

    /// A recognised construct without a translation rule, tagged with its
    /// php-parser node type (e.g. `Stmt_Echo`, `Expr_BinaryOp_Plus`).
    Other { kind: String, children: Vec<Node> },
}

impl NodeKind {
    /// The php-parser node type name for this kind.
    pub fn kind_name(&self) -> &str {
        match self {
            NodeKind::Expression { .. } => "Stmt_Expression",
            NodeKind::Return { .. } => "Stmt_Return",
            NodeKind::Namespace { .. } => "Stmt_Namespace",
            NodeKind::Class { .. } => "Stmt_Class",
            NodeKind::Property { .. } => "Stmt_Property",
            NodeKind::PropertyItem { .. } => "PropertyItem",
            NodeKind::ClassMethod { .. } => "Stmt_ClassMethod",
            NodeKind::MethodCall { .. } => "Expr_MethodCall",
            NodeKind::FunctionCall { .. } => "Expr_FuncCall",
            NodeKind::New { .. } => "Expr_New",
            NodeKind::ArrayDimFetch { .. } => "Expr_ArrayDimFetch",
            NodeKind::PropertyFetch { .. } => "Expr_PropertyFetch",
            NodeKind::Assign { .. } => "Expr_Assign",
            NodeKind::AssignAdd { .. } => "Expr_AssignOp_Plus",
            NodeKind::Concat { .. } => "Expr_BinaryOp_Concat",
            NodeKind::ArrowFunction { .. } => "Expr_ArrowFunction",
            NodeKind::Closure { .. } => "Expr_Closure",
            NodeKind::Array { .. } => "Expr_Array",
            NodeKind::ArrayItem { .. } => "ArrayItem",
            NodeKind::Argument { .. } => "Arg",
            NodeKind::Parameter { .. } => "Param",
            NodeKind::Variable { .. } => "Expr_Variable",
            NodeKind::ConstFetch { .. } => "Expr_ConstFetch",
            NodeKind::Int { .. } => "Scalar_Int",
            NodeKind::Float { .. } => "Scalar_Float",
            NodeKind::String { .. } => "Scalar_String",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::Name {
                fully_qualified: true,
                ..
            } => "Name_FullyQualified",
            NodeKind::Name { .. } => "Name",
            NodeKind::Other { kind, .. } => kind,
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// A node with no source position, for trees built in code.
    pub fn synthetic(kind: NodeKind) -> Self {
        Node {
            kind,
            span: Span::dummy(),
        }
    }

    pub fn kind_name(&self) -> &str {
        self.kind.kind_name()
    }

    pub fn boxed(self) -> Box<Node> {
        Box::new(self)
    }

    // -------------------------------------------------------------------------
    // Leaf constructors
    // -------------------------------------------------------------------------

    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Identifier { name: name.into() }, span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Node::new(NodeKind::Variable { name: name.into() }, span)
    }

    pub fn string(value: impl Into<String>, span: Span) -> Self {
        Node::new(
            NodeKind::String {
                value: value.into(),
            },
            span,
        )
    }

    /// An unqualified single-part name.
    pub fn name(part: impl Into<String>, span: Span) -> Self {
        Node::new(
            NodeKind::Name {
                parts: vec![part.into()],
                fully_qualified: false,
            },
            span,
        )
    }
}
