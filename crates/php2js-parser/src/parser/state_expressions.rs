use super::ParserState;
use super::literals::{
    parse_float_literal, parse_int_literal, unescape_double_quoted, unescape_single_quoted,
};
use crate::ast::{Node, NodeKind};
use crate::error::ParseError;
use php2js_common::Span;
use php2js_scanner::SyntaxKind;

/// Binary operators by precedence (higher binds tighter), PHP 8 order.
/// `.` sits below `+`/`-` since PHP 8.0.
fn binary_operator(kind: SyntaxKind) -> Option<(u8, &'static str)> {
    Some(match kind {
        SyntaxKind::BarBar => (1, "Expr_BinaryOp_BooleanOr"),
        SyntaxKind::AmpersandAmpersand => (2, "Expr_BinaryOp_BooleanAnd"),
        SyntaxKind::EqualsEquals => (3, "Expr_BinaryOp_Equal"),
        SyntaxKind::EqualsEqualsEquals => (3, "Expr_BinaryOp_Identical"),
        SyntaxKind::ExclamationEquals => (3, "Expr_BinaryOp_NotEqual"),
        SyntaxKind::ExclamationEqualsEquals => (3, "Expr_BinaryOp_NotIdentical"),
        SyntaxKind::LessThan => (4, "Expr_BinaryOp_Smaller"),
        SyntaxKind::LessThanEquals => (4, "Expr_BinaryOp_SmallerOrEqual"),
        SyntaxKind::GreaterThan => (4, "Expr_BinaryOp_Greater"),
        SyntaxKind::GreaterThanEquals => (4, "Expr_BinaryOp_GreaterOrEqual"),
        SyntaxKind::Dot => (5, "Expr_BinaryOp_Concat"),
        SyntaxKind::Plus => (6, "Expr_BinaryOp_Plus"),
        SyntaxKind::Minus => (6, "Expr_BinaryOp_Minus"),
        SyntaxKind::Asterisk => (7, "Expr_BinaryOp_Mul"),
        SyntaxKind::Slash => (7, "Expr_BinaryOp_Div"),
        SyntaxKind::Percent => (7, "Expr_BinaryOp_Mod"),
        _ => return None,
    })
}

fn is_postfix_operator(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Arrow
            | SyntaxKind::NullsafeArrow
            | SyntaxKind::OpenBracket
            | SyntaxKind::OpenParen
            | SyntaxKind::DoubleColon
    )
}

fn is_assignable(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Variable { .. } | NodeKind::ArrayDimFetch { .. } | NodeKind::PropertyFetch { .. }
    )
}

impl<'a> ParserState<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.enter()?;
        let result = self.parse_assignment();
        self.leave();
        result
    }

    /// Assignment is right-associative: `$a = $b = 1`.
    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        let target = self.parse_binary(0)?;

        let op = self.current().kind;
        let compound = match op {
            SyntaxKind::Equals | SyntaxKind::PlusEquals => None,
            SyntaxKind::MinusEquals => Some("Expr_AssignOp_Minus"),
            SyntaxKind::AsteriskEquals => Some("Expr_AssignOp_Mul"),
            SyntaxKind::SlashEquals => Some("Expr_AssignOp_Div"),
            SyntaxKind::DotEquals => Some("Expr_AssignOp_Concat"),
            _ => return Ok(target),
        };
        if !is_assignable(&target) {
            return Err(self.error_here("cannot assign to this expression"));
        }
        self.bump();
        let value = self.parse_expression()?;

        if let Some(kind) = compound {
            return Ok(self.other(kind, vec![target, value], start));
        }
        let kind = if op == SyntaxKind::Equals {
            NodeKind::Assign {
                target: target.boxed(),
                value: value.boxed(),
            }
        } else {
            NodeKind::AssignAdd {
                target: target.boxed(),
                value: value.boxed(),
            }
        };
        Ok(Node::new(kind, self.span_from(start)))
    }

    /// Precedence climbing over left-associative binary operators.
    ///
    /// Every operator adds a tree level above `left`, so each one counts
    /// against the nesting depth.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Node, ParseError> {
        self.with_chain(|p| p.parse_binary_chain(min_precedence))
    }

    fn parse_binary_chain(&mut self, min_precedence: u8) -> Result<Node, ParseError> {
        let start = self.current().span;
        let mut left = self.parse_unary()?;

        while let Some((precedence, kind)) = binary_operator(self.current().kind) {
            if precedence < min_precedence {
                break;
            }
            self.enter()?;
            self.bump();
            let right = self.parse_binary(precedence + 1)?;
            left = if kind == "Expr_BinaryOp_Concat" {
                Node::new(
                    NodeKind::Concat {
                        left: left.boxed(),
                        right: right.boxed(),
                    },
                    self.span_from(start),
                )
            } else {
                self.other(kind, vec![left, right], start)
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        let kind = match self.current().kind {
            SyntaxKind::Exclamation => "Expr_BooleanNot",
            SyntaxKind::Minus => "Expr_UnaryMinus",
            SyntaxKind::Plus => "Expr_UnaryPlus",
            _ => return self.parse_postfix(),
        };
        self.bump();
        self.enter()?;
        let operand = self.parse_unary();
        self.leave();
        Ok(self.other(kind, vec![operand?], start))
    }

    /// Member access, indexing, and calls chained onto a primary expression.
    /// Each link counts against the nesting depth, like `parse_binary`.
    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        self.with_chain(|p| p.parse_postfix_chain())
    }

    fn parse_postfix_chain(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        let mut expr = self.parse_primary()?;

        loop {
            if is_postfix_operator(self.current().kind) {
                self.enter()?;
            }
            match self.current().kind {
                SyntaxKind::Arrow => {
                    self.bump();
                    let member = self.parse_member_name()?;
                    expr = if self.at(SyntaxKind::OpenParen) {
                        let args = self.parse_arguments()?;
                        Node::new(
                            NodeKind::MethodCall {
                                target: expr.boxed(),
                                method: member.boxed(),
                                args,
                            },
                            self.span_from(start),
                        )
                    } else {
                        Node::new(
                            NodeKind::PropertyFetch {
                                base: expr.boxed(),
                                property: member.boxed(),
                            },
                            self.span_from(start),
                        )
                    };
                }
                SyntaxKind::NullsafeArrow => {
                    self.bump();
                    let member = self.parse_member_name()?;
                    expr = if self.at(SyntaxKind::OpenParen) {
                        let mut children = vec![expr, member];
                        children.extend(self.parse_arguments()?);
                        self.other("Expr_NullsafeMethodCall", children, start)
                    } else {
                        self.other("Expr_NullsafePropertyFetch", vec![expr, member], start)
                    };
                }
                SyntaxKind::OpenBracket => {
                    self.bump();
                    let index = if self.at(SyntaxKind::CloseBracket) {
                        None
                    } else {
                        Some(self.parse_expression()?.boxed())
                    };
                    self.expect(SyntaxKind::CloseBracket)?;
                    expr = Node::new(
                        NodeKind::ArrayDimFetch {
                            base: expr.boxed(),
                            index,
                        },
                        self.span_from(start),
                    );
                }
                SyntaxKind::OpenParen => {
                    let args = self.parse_arguments()?;
                    expr = Node::new(
                        NodeKind::FunctionCall {
                            name: expr.boxed(),
                            args,
                        },
                        self.span_from(start),
                    );
                }
                SyntaxKind::DoubleColon => {
                    self.bump();
                    expr = self.parse_static_access(expr, start)?;
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    /// `Class::method()`, `Class::$prop`, `Class::CONST`, `Class::class`.
    fn parse_static_access(&mut self, class: Node, start: Span) -> Result<Node, ParseError> {
        let token = self.current();
        if token.kind == SyntaxKind::Variable {
            self.bump();
            let var = Node::variable(&self.text(token)[1..], token.span);
            return Ok(self.other("Expr_StaticPropertyFetch", vec![class, var], start));
        }

        let member = self.parse_identifier()?;
        if self.at(SyntaxKind::OpenParen) {
            let mut children = vec![class, member];
            children.extend(self.parse_arguments()?);
            Ok(self.other("Expr_StaticCall", children, start))
        } else {
            Ok(self.other("Expr_ClassConstFetch", vec![class, member], start))
        }
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        let start = token.span;

        match token.kind {
            SyntaxKind::Variable => {
                self.bump();
                Ok(Node::variable(&self.text(token)[1..], start))
            }
            SyntaxKind::IntegerLiteral => {
                self.bump();
                parse_int_literal(self.text(token))
                    .map(|kind| Node::new(kind, start))
                    .ok_or_else(|| ParseError::new("invalid numeric literal", start))
            }
            SyntaxKind::FloatLiteral => {
                self.bump();
                parse_float_literal(self.text(token))
                    .map(|value| Node::new(NodeKind::Float { value }, start))
                    .ok_or_else(|| ParseError::new("invalid numeric literal", start))
            }
            SyntaxKind::SingleQuotedString => {
                self.bump();
                Ok(Node::string(unescape_single_quoted(self.text(token)), start))
            }
            SyntaxKind::DoubleQuotedString => {
                self.bump();
                match unescape_double_quoted(self.text(token)) {
                    Some(value) => Ok(Node::string(value, start)),
                    None => Ok(self.other("Scalar_InterpolatedString", Vec::new(), start)),
                }
            }
            SyntaxKind::OpenBracket => {
                self.parse_array(SyntaxKind::OpenBracket, SyntaxKind::CloseBracket)
            }
            SyntaxKind::ArrayKeyword if self.peek_kind(1) == SyntaxKind::OpenParen => {
                self.bump();
                let mut array = self.parse_array(SyntaxKind::OpenParen, SyntaxKind::CloseParen)?;
                array.span = self.span_from(start);
                Ok(array)
            }
            SyntaxKind::OpenParen => {
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(SyntaxKind::CloseParen)?;
                Ok(expr)
            }
            SyntaxKind::NewKeyword => self.parse_new(),
            SyntaxKind::FnKeyword => self.parse_arrow_function(start),
            SyntaxKind::FunctionKeyword => self.parse_closure(start),
            SyntaxKind::StaticKeyword
                if matches!(
                    self.peek_kind(1),
                    SyntaxKind::FnKeyword | SyntaxKind::FunctionKeyword
                ) =>
            {
                // `static` only unbinds `$this`, which a JS closure does not capture anyway.
                self.bump();
                if self.at(SyntaxKind::FnKeyword) {
                    self.parse_arrow_function(start)
                } else {
                    self.parse_closure(start)
                }
            }
            SyntaxKind::Identifier | SyntaxKind::Backslash | SyntaxKind::StaticKeyword => {
                let name = self.parse_name()?;
                if self.at(SyntaxKind::OpenParen) || self.at(SyntaxKind::DoubleColon) {
                    Ok(name)
                } else {
                    Ok(Node::new(
                        NodeKind::ConstFetch { name: name.boxed() },
                        start,
                    ))
                }
            }
            _ => Err(self.error_here("expected expression")),
        }
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// `Foo`, `Foo\Bar`, `\Foo\Bar`
    pub(super) fn parse_name(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        let fully_qualified = self.eat(SyntaxKind::Backslash);
        let mut parts = Vec::new();

        loop {
            let token = self.current();
            if !token.kind.is_identifier_like() {
                return Err(self.error_here("expected name"));
            }
            self.bump();
            parts.push(self.text(token).to_string());
            if self.at(SyntaxKind::Backslash) && self.peek_kind(1).is_identifier_like() {
                self.bump();
            } else {
                break;
            }
        }

        Ok(Node::new(
            NodeKind::Name {
                parts,
                fully_qualified,
            },
            self.span_from(start),
        ))
    }

    /// A declaration or member name; keywords are allowed (`function list()`).
    pub(super) fn parse_identifier(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        if !token.kind.is_identifier_like() {
            return Err(self.error_here("expected identifier"));
        }
        self.bump();
        Ok(Node::identifier(self.text(token), token.span))
    }

    /// The name after `->`: an identifier, a variable, or `{expr}`.
    fn parse_member_name(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        match token.kind {
            SyntaxKind::Variable => {
                self.bump();
                Ok(Node::variable(&self.text(token)[1..], token.span))
            }
            SyntaxKind::OpenBrace => {
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(SyntaxKind::CloseBrace)?;
                Ok(expr)
            }
            _ => self.parse_identifier(),
        }
    }

    // =========================================================================
    // Calls and object construction
    // =========================================================================

    /// `(arg, arg, ...)`
    fn parse_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let mut args = Vec::new();

        while !self.at(SyntaxKind::CloseParen) {
            if self.current().kind.is_identifier_like() && self.peek_kind(1) == SyntaxKind::Colon {
                return Err(self.error_here("named arguments are not supported"));
            }
            if self.at(SyntaxKind::Ellipsis) {
                return Err(self.error_here("argument unpacking is not supported"));
            }
            let start = self.current().span;
            let value = self.parse_expression()?;
            args.push(Node::new(
                NodeKind::Argument {
                    value: value.boxed(),
                },
                self.span_from(start),
            ));
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        self.expect(SyntaxKind::CloseParen)?;
        Ok(args)
    }

    /// `new Foo(args)`, `new Foo`, `new $class(args)`
    fn parse_new(&mut self) -> Result<Node, ParseError> {
        let start = self.expect(SyntaxKind::NewKeyword)?.span;
        let token = self.current();
        let class = match token.kind {
            SyntaxKind::ClassKeyword => {
                return Err(self.error_here("anonymous classes are not supported"));
            }
            SyntaxKind::Variable => {
                self.bump();
                Node::variable(&self.text(token)[1..], token.span)
            }
            SyntaxKind::OpenParen => {
                self.bump();
                let expr = self.parse_expression()?;
                self.expect(SyntaxKind::CloseParen)?;
                expr
            }
            _ => self.parse_name()?,
        };
        let args = if self.at(SyntaxKind::OpenParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        Ok(Node::new(
            NodeKind::New {
                class: class.boxed(),
                args,
            },
            self.span_from(start),
        ))
    }

    // =========================================================================
    // Arrays
    // =========================================================================

    /// `[a, k => v, , b]` or `array(...)`; an empty slot becomes `None`.
    fn parse_array(&mut self, open: SyntaxKind, close: SyntaxKind) -> Result<Node, ParseError> {
        let start = self.expect(open)?.span;
        let mut items = Vec::new();

        loop {
            if self.eat(close) {
                break;
            }
            if self.eat(SyntaxKind::Comma) {
                items.push(None);
                continue;
            }
            items.push(Some(self.parse_array_item()?));
            if !self.eat(SyntaxKind::Comma) {
                self.expect(close)?;
                break;
            }
        }

        Ok(Node::new(NodeKind::Array { items }, self.span_from(start)))
    }

    fn parse_array_item(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        if self.at(SyntaxKind::Ampersand) {
            return Err(self.error_here("by-reference array items are not supported"));
        }
        if self.at(SyntaxKind::Ellipsis) {
            return Err(self.error_here("array unpacking is not supported"));
        }

        let first = self.parse_expression()?;
        let (key, value) = if self.eat(SyntaxKind::DoubleArrow) {
            (Some(first.boxed()), self.parse_expression()?)
        } else {
            (None, first)
        };

        Ok(Node::new(
            NodeKind::ArrayItem {
                key,
                value: value.boxed(),
            },
            self.span_from(start),
        ))
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// `fn (params) => expr`; `start` covers a leading `static`.
    fn parse_arrow_function(&mut self, start: Span) -> Result<Node, ParseError> {
        self.expect(SyntaxKind::FnKeyword)?;
        if self.at(SyntaxKind::Ampersand) {
            return Err(self.error_here("by-reference returns are not supported"));
        }
        let params = self.parse_parameter_list()?;
        self.skip_return_type()?;
        self.expect(SyntaxKind::DoubleArrow)?;
        let body = self.parse_expression()?;

        Ok(Node::new(
            NodeKind::ArrowFunction {
                params,
                body: body.boxed(),
            },
            self.span_from(start),
        ))
    }

    /// `function (params) use ($a, $b) { stmts }`
    fn parse_closure(&mut self, start: Span) -> Result<Node, ParseError> {
        self.expect(SyntaxKind::FunctionKeyword)?;
        if self.at(SyntaxKind::Ampersand) {
            return Err(self.error_here("by-reference returns are not supported"));
        }
        let params = self.parse_parameter_list()?;

        let mut uses = Vec::new();
        if self.eat(SyntaxKind::UseKeyword) {
            self.expect(SyntaxKind::OpenParen)?;
            while !self.at(SyntaxKind::CloseParen) {
                if self.at(SyntaxKind::Ampersand) {
                    return Err(self.error_here("by-reference closure bindings are not supported"));
                }
                let token = self.expect(SyntaxKind::Variable)?;
                uses.push(Node::variable(&self.text(token)[1..], token.span));
                if !self.eat(SyntaxKind::Comma) {
                    break;
                }
            }
            self.expect(SyntaxKind::CloseParen)?;
        }

        self.skip_return_type()?;
        let stmts = self.parse_block()?;

        Ok(Node::new(
            NodeKind::Closure {
                params,
                uses,
                stmts,
            },
            self.span_from(start),
        ))
    }
}
