use super::ParserState;
use crate::ast::{Modifiers, Node, NodeKind};
use crate::error::ParseError;
use php2js_common::Span;
use php2js_scanner::SyntaxKind;

impl<'a> ParserState<'a> {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn parse_statements_until(
        &mut self,
        end: SyntaxKind,
    ) -> Result<Vec<Node>, ParseError> {
        let mut stmts = Vec::new();
        while !self.at(end) {
            if self.at(SyntaxKind::EndOfFile) {
                return Err(self.error_here(format!("expected {}", end.describe())));
            }
            if self.eat(SyntaxKind::CloseTag) {
                continue;
            }
            stmts.push(self.parse_statement()?);
        }
        Ok(stmts)
    }

    pub(super) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        self.enter()?;
        let result = self.parse_statement_inner();
        self.leave();
        result
    }

    fn parse_statement_inner(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        let start = token.span;

        match token.kind {
            SyntaxKind::InlineHtml => {
                self.bump();
                Ok(self.other("Stmt_InlineHTML", Vec::new(), start))
            }
            SyntaxKind::Semicolon => {
                self.bump();
                Ok(self.other("Stmt_Nop", Vec::new(), start))
            }
            SyntaxKind::OpenBrace => {
                self.bump();
                let stmts = self.parse_statements_until(SyntaxKind::CloseBrace)?;
                self.expect(SyntaxKind::CloseBrace)?;
                Ok(self.other("Stmt_Block", stmts, start))
            }
            SyntaxKind::ReturnKeyword => {
                self.bump();
                let expr = if self.at(SyntaxKind::Semicolon) || self.at(SyntaxKind::CloseTag) {
                    None
                } else {
                    Some(self.parse_expression()?.boxed())
                };
                self.expect_terminator()?;
                Ok(Node::new(NodeKind::Return { expr }, self.span_from(start)))
            }
            SyntaxKind::EchoKeyword => {
                self.bump();
                let mut exprs = vec![self.parse_expression()?];
                while self.eat(SyntaxKind::Comma) {
                    exprs.push(self.parse_expression()?);
                }
                self.expect_terminator()?;
                Ok(self.other("Stmt_Echo", exprs, start))
            }
            SyntaxKind::IfKeyword => self.parse_if(),
            SyntaxKind::UseKeyword => {
                // Imports only affect name resolution, which is not modelled;
                // keep the node so the translator rejects it.
                self.bump();
                while !self.at(SyntaxKind::Semicolon) && !self.at(SyntaxKind::EndOfFile) {
                    self.bump();
                }
                self.expect_terminator()?;
                Ok(self.other("Stmt_Use", Vec::new(), start))
            }
            SyntaxKind::DeclareKeyword => {
                self.bump();
                self.expect(SyntaxKind::OpenParen)?;
                while !self.at(SyntaxKind::CloseParen) && !self.at(SyntaxKind::EndOfFile) {
                    self.bump();
                }
                self.expect(SyntaxKind::CloseParen)?;
                self.expect_terminator()?;
                Ok(self.other("Stmt_Declare", Vec::new(), start))
            }
            SyntaxKind::FunctionKeyword if self.peek_kind(1).is_identifier_like() => {
                self.parse_function_declaration()
            }
            SyntaxKind::ClassKeyword => self.parse_class(),
            SyntaxKind::AbstractKeyword
            | SyntaxKind::FinalKeyword
            | SyntaxKind::ReadonlyKeyword => {
                // Class modifiers carry no meaning in the output.
                while matches!(
                    self.current().kind,
                    SyntaxKind::AbstractKeyword
                        | SyntaxKind::FinalKeyword
                        | SyntaxKind::ReadonlyKeyword
                ) {
                    self.bump();
                }
                if !self.at(SyntaxKind::ClassKeyword) {
                    return Err(self.error_here("expected `class`"));
                }
                let mut class = self.parse_class()?;
                class.span = self.span_from(start);
                Ok(class)
            }
            SyntaxKind::NamespaceKeyword => {
                Err(self.error_here("namespace declarations must be at the top level"))
            }
            SyntaxKind::AttributeStart => Err(self.error_here("attributes are not supported")),
            _ => {
                let expr = self.parse_expression()?;
                self.expect_terminator()?;
                Ok(Node::new(
                    NodeKind::Expression {
                        expr: expr.boxed(),
                    },
                    self.span_from(start),
                ))
            }
        }
    }

    /// `if (cond) stmt [elseif (cond) stmt]* [else stmt]`
    fn parse_if(&mut self) -> Result<Node, ParseError> {
        let start = self.expect(SyntaxKind::IfKeyword)?.span;
        let mut children = Vec::new();

        self.expect(SyntaxKind::OpenParen)?;
        children.push(self.parse_expression()?);
        self.expect(SyntaxKind::CloseParen)?;
        children.push(self.parse_statement()?);

        loop {
            let clause_start = self.current().span;
            if self.eat(SyntaxKind::ElseIfKeyword) {
                self.expect(SyntaxKind::OpenParen)?;
                let cond = self.parse_expression()?;
                self.expect(SyntaxKind::CloseParen)?;
                let body = self.parse_statement()?;
                children.push(self.other("Stmt_ElseIf", vec![cond, body], clause_start));
            } else if self.eat(SyntaxKind::ElseKeyword) {
                let body = self.parse_statement()?;
                children.push(self.other("Stmt_Else", vec![body], clause_start));
                break;
            } else {
                break;
            }
        }

        Ok(self.other("Stmt_If", children, start))
    }

    /// `function name(params) { body }` at statement level.
    fn parse_function_declaration(&mut self) -> Result<Node, ParseError> {
        let start = self.expect(SyntaxKind::FunctionKeyword)?.span;
        let name = self.parse_identifier()?;
        let mut children = vec![name];
        children.extend(self.parse_parameter_list()?);
        self.skip_return_type()?;
        children.extend(self.parse_block()?);
        Ok(self.other("Stmt_Function", children, start))
    }

    /// `{ stmts }`
    pub(super) fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        self.expect(SyntaxKind::OpenBrace)?;
        let stmts = self.parse_statements_until(SyntaxKind::CloseBrace)?;
        self.expect(SyntaxKind::CloseBrace)?;
        Ok(stmts)
    }

    // =========================================================================
    // Classes
    // =========================================================================

    fn parse_class(&mut self) -> Result<Node, ParseError> {
        let start = self.expect(SyntaxKind::ClassKeyword)?.span;
        let name = self.parse_identifier()?;

        if self.at(SyntaxKind::Identifier) {
            let word = self.text(self.current()).to_ascii_lowercase();
            if word == "extends" || word == "implements" {
                return Err(self.error_here("class inheritance is not supported"));
            }
        }

        self.expect(SyntaxKind::OpenBrace)?;
        let mut members = Vec::new();
        while !self.eat(SyntaxKind::CloseBrace) {
            if self.at(SyntaxKind::EndOfFile) {
                return Err(self.error_here("expected `}`"));
            }
            members.push(self.parse_class_member()?);
        }

        Ok(Node::new(
            NodeKind::Class {
                name: Some(name.boxed()),
                namespaced_name: None,
                members,
            },
            self.span_from(start),
        ))
    }

    fn parse_class_member(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;

        if self.eat(SyntaxKind::UseKeyword) {
            let mut traits = vec![self.parse_name()?];
            while self.eat(SyntaxKind::Comma) {
                traits.push(self.parse_name()?);
            }
            self.expect_terminator()?;
            return Ok(self.other("Stmt_TraitUse", traits, start));
        }
        if self.at(SyntaxKind::AttributeStart) {
            return Err(self.error_here("attributes are not supported"));
        }

        let modifiers = self.parse_modifiers();

        if self.eat(SyntaxKind::FunctionKeyword) {
            if self.at(SyntaxKind::Ampersand) {
                return Err(self.error_here("by-reference returns are not supported"));
            }
            let name = self.parse_identifier()?;
            let params = self.parse_parameter_list()?;
            self.skip_return_type()?;
            let body = if self.eat(SyntaxKind::Semicolon) {
                None
            } else {
                Some(self.parse_block()?)
            };
            return Ok(Node::new(
                NodeKind::ClassMethod {
                    modifiers,
                    name: name.boxed(),
                    params,
                    body,
                },
                self.span_from(start),
            ));
        }

        if modifiers.is_empty() {
            if self.at(SyntaxKind::Identifier)
                && self.text(self.current()).eq_ignore_ascii_case("const")
            {
                return Err(self.error_here("class constants are not supported"));
            }
            return Err(self.error_here("expected class member"));
        }

        self.skip_type()?;
        let mut props = vec![self.parse_property_item()?];
        while self.eat(SyntaxKind::Comma) {
            props.push(self.parse_property_item()?);
        }
        self.expect_terminator()?;
        Ok(Node::new(
            NodeKind::Property { modifiers, props },
            self.span_from(start),
        ))
    }

    /// `$name [= default]`
    fn parse_property_item(&mut self) -> Result<Node, ParseError> {
        let token = self.expect(SyntaxKind::Variable)?;
        let name = Node::identifier(&self.text(token)[1..], token.span);
        let default = if self.eat(SyntaxKind::Equals) {
            Some(self.parse_expression()?.boxed())
        } else {
            None
        };
        Ok(Node::new(
            NodeKind::PropertyItem {
                name: name.boxed(),
                default,
            },
            self.span_from(token.span),
        ))
    }

    /// Member modifiers; `var` counts as `public`.
    fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        loop {
            let flag = match self.current().kind {
                SyntaxKind::PublicKeyword | SyntaxKind::VarKeyword => Modifiers::PUBLIC,
                SyntaxKind::ProtectedKeyword => Modifiers::PROTECTED,
                SyntaxKind::PrivateKeyword => Modifiers::PRIVATE,
                SyntaxKind::StaticKeyword => Modifiers::STATIC,
                SyntaxKind::AbstractKeyword => Modifiers::ABSTRACT,
                SyntaxKind::FinalKeyword => Modifiers::FINAL,
                SyntaxKind::ReadonlyKeyword => Modifiers::READONLY,
                _ => return modifiers,
            };
            self.bump();
            modifiers |= flag;
        }
    }

    // =========================================================================
    // Parameters and types
    // =========================================================================

    /// `(param, param, ...)`
    pub(super) fn parse_parameter_list(&mut self) -> Result<Vec<Node>, ParseError> {
        self.expect(SyntaxKind::OpenParen)?;
        let mut params = Vec::new();
        while !self.at(SyntaxKind::CloseParen) {
            params.push(self.parse_parameter()?);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.expect(SyntaxKind::CloseParen)?;
        Ok(params)
    }

    fn parse_parameter(&mut self) -> Result<Node, ParseError> {
        let start = self.current().span;
        if self.current().kind.is_modifier() {
            return Err(self.error_here("constructor property promotion is not supported"));
        }
        self.skip_type()?;
        if self.at(SyntaxKind::Ampersand) {
            return Err(self.error_here("by-reference parameters are not supported"));
        }
        if self.at(SyntaxKind::Ellipsis) {
            return Err(self.error_here("variadic parameters are not supported"));
        }

        let token = self.expect(SyntaxKind::Variable)?;
        let var = Node::variable(&self.text(token)[1..], token.span);
        if self.at(SyntaxKind::Equals) {
            return Err(self.error_here("parameter default values are not supported"));
        }

        Ok(Node::new(
            NodeKind::Parameter { var: var.boxed() },
            self.span_from(start),
        ))
    }

    /// `: type` after a parameter list.
    pub(super) fn skip_return_type(&mut self) -> Result<(), ParseError> {
        if self.eat(SyntaxKind::Colon) {
            if !self.skip_type()? {
                return Err(self.error_here("expected return type"));
            }
        }
        Ok(())
    }

    /// Skip an optional type declaration (`?Foo`, `int|string`, `\Foo\Bar`,
    /// `array`, `static`). Returns whether a type was present.
    fn skip_type(&mut self) -> Result<bool, ParseError> {
        let nullable = self.eat(SyntaxKind::Question);
        let mut found = false;
        loop {
            match self.current().kind {
                SyntaxKind::Identifier | SyntaxKind::ArrayKeyword | SyntaxKind::StaticKeyword => {
                    self.bump();
                }
                SyntaxKind::Backslash => {
                    self.bump();
                    continue;
                }
                _ => break,
            }
            found = true;
            if self.at(SyntaxKind::Backslash) {
                continue;
            }
            // `A|B` union and `A&B` intersection; `&$x` is a by-ref marker
            if self.at(SyntaxKind::Bar)
                || (self.at(SyntaxKind::Ampersand) && self.peek_kind(1) != SyntaxKind::Variable)
            {
                self.bump();
                continue;
            }
            break;
        }
        if nullable && !found {
            return Err(self.error_here("expected type after `?`"));
        }
        Ok(found)
    }

    /// A node for a construct the translator has no rule for.
    pub(super) fn other(&self, kind: &str, children: Vec<Node>, start: Span) -> Node {
        Node::new(
            NodeKind::Other {
                kind: kind.to_string(),
                children,
            },
            self.span_from(start),
        )
    }
}
