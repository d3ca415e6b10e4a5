//! Token kinds for the PHP subset.

use logos::{FilterResult, Lexer, Logos};
use std::fmt;

/// Why the logos lexer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    Unrecognized,
    UnterminatedComment,
}

/// Token kinds produced by the scanner.
///
/// Keywords are case-insensitive, as in PHP. Whitespace and comments are
/// skipped. `InlineHtml` and `EndOfFile` are synthesized by
/// [`tokenize`](crate::tokenize) and never matched by the logos lexer itself.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip // comments
#[logos(error = LexError)]
pub enum SyntaxKind {
    // === Keywords ===
    #[token("abstract", ignore(ascii_case))]
    AbstractKeyword,
    #[token("array", ignore(ascii_case))]
    ArrayKeyword,
    #[token("class", ignore(ascii_case))]
    ClassKeyword,
    #[token("declare", ignore(ascii_case))]
    DeclareKeyword,
    #[token("echo", ignore(ascii_case))]
    EchoKeyword,
    #[token("else", ignore(ascii_case))]
    ElseKeyword,
    #[token("elseif", ignore(ascii_case))]
    ElseIfKeyword,
    #[token("final", ignore(ascii_case))]
    FinalKeyword,
    #[token("fn", ignore(ascii_case))]
    FnKeyword,
    #[token("function", ignore(ascii_case))]
    FunctionKeyword,
    #[token("if", ignore(ascii_case))]
    IfKeyword,
    #[token("namespace", ignore(ascii_case))]
    NamespaceKeyword,
    #[token("new", ignore(ascii_case))]
    NewKeyword,
    #[token("private", ignore(ascii_case))]
    PrivateKeyword,
    #[token("protected", ignore(ascii_case))]
    ProtectedKeyword,
    #[token("public", ignore(ascii_case))]
    PublicKeyword,
    #[token("readonly", ignore(ascii_case))]
    ReadonlyKeyword,
    #[token("return", ignore(ascii_case))]
    ReturnKeyword,
    #[token("static", ignore(ascii_case))]
    StaticKeyword,
    #[token("use", ignore(ascii_case))]
    UseKeyword,
    #[token("var", ignore(ascii_case))]
    VarKeyword,

    // === Delimiters ===
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("?>")]
    CloseTag,
    #[token("#[")]
    AttributeStart,

    // === Operators ===
    #[token("->")]
    Arrow,
    #[token("?->")]
    NullsafeArrow,
    #[token("=>")]
    DoubleArrow,
    #[token("::")]
    DoubleColon,
    #[token("\\")]
    Backslash,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("|")]
    Bar,
    #[token("&")]
    Ampersand,
    #[token("...")]
    Ellipsis,
    #[token("=")]
    Equals,
    #[token("+=")]
    PlusEquals,
    #[token("-=")]
    MinusEquals,
    #[token("*=")]
    AsteriskEquals,
    #[token("/=")]
    SlashEquals,
    #[token(".=")]
    DotEquals,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqualsEquals,
    #[token("===")]
    EqualsEqualsEquals,
    #[token("!=")]
    ExclamationEquals,
    #[token("!==")]
    ExclamationEqualsEquals,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("<=")]
    LessThanEquals,
    #[token(">=")]
    GreaterThanEquals,
    #[token("&&")]
    AmpersandAmpersand,
    #[token("||")]
    BarBar,
    #[token("!")]
    Exclamation,

    // === Literals and names ===
    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,
    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Identifier,
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    #[regex(r"0[oO][0-7][0-7_]*")]
    #[regex(r"0[bB][01][01_]*")]
    IntegerLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    FloatLiteral,
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    SingleQuotedString,
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleQuotedString,

    /// `/* */`, `/** */` and `#` comments; skipped, never produced.
    /// `#[` still lexes as `AttributeStart` (longest match).
    #[token("/*", block_comment)]
    #[token("#", hash_comment)]
    Comment,

    // === Synthesized ===
    /// Text outside `<?php ... ?>`.
    InlineHtml,
    EndOfFile,
}

fn block_comment(lex: &mut Lexer<'_, SyntaxKind>) -> FilterResult<(), LexError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => FilterResult::Error(LexError::UnterminatedComment),
    }
}

fn hash_comment(lex: &mut Lexer<'_, SyntaxKind>) -> FilterResult<(), LexError> {
    let end = lex.remainder().find('\n').unwrap_or(lex.remainder().len());
    lex.bump(end);
    FilterResult::Skip
}

impl SyntaxKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::ArrayKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::EchoKeyword
                | SyntaxKind::ElseKeyword
                | SyntaxKind::ElseIfKeyword
                | SyntaxKind::FinalKeyword
                | SyntaxKind::FnKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::IfKeyword
                | SyntaxKind::NamespaceKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::ReturnKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::UseKeyword
                | SyntaxKind::VarKeyword
        )
    }

    /// Keywords that may still be used as a member name (`$x->class`,
    /// `function list()`), i.e. every keyword.
    pub fn is_identifier_like(self) -> bool {
        self == SyntaxKind::Identifier || self.is_keyword()
    }

    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::FinalKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::VarKeyword
        )
    }

    /// Human-readable description used in parse errors.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::AbstractKeyword => "`abstract`",
            SyntaxKind::ArrayKeyword => "`array`",
            SyntaxKind::ClassKeyword => "`class`",
            SyntaxKind::DeclareKeyword => "`declare`",
            SyntaxKind::EchoKeyword => "`echo`",
            SyntaxKind::ElseKeyword => "`else`",
            SyntaxKind::ElseIfKeyword => "`elseif`",
            SyntaxKind::FinalKeyword => "`final`",
            SyntaxKind::FnKeyword => "`fn`",
            SyntaxKind::FunctionKeyword => "`function`",
            SyntaxKind::IfKeyword => "`if`",
            SyntaxKind::NamespaceKeyword => "`namespace`",
            SyntaxKind::NewKeyword => "`new`",
            SyntaxKind::PrivateKeyword => "`private`",
            SyntaxKind::ProtectedKeyword => "`protected`",
            SyntaxKind::PublicKeyword => "`public`",
            SyntaxKind::ReadonlyKeyword => "`readonly`",
            SyntaxKind::ReturnKeyword => "`return`",
            SyntaxKind::StaticKeyword => "`static`",
            SyntaxKind::UseKeyword => "`use`",
            SyntaxKind::VarKeyword => "`var`",
            SyntaxKind::OpenParen => "`(`",
            SyntaxKind::CloseParen => "`)`",
            SyntaxKind::OpenBracket => "`[`",
            SyntaxKind::CloseBracket => "`]`",
            SyntaxKind::OpenBrace => "`{`",
            SyntaxKind::CloseBrace => "`}`",
            SyntaxKind::Comma => "`,`",
            SyntaxKind::Semicolon => "`;`",
            SyntaxKind::CloseTag => "`?>`",
            SyntaxKind::AttributeStart => "`#[`",
            SyntaxKind::Arrow => "`->`",
            SyntaxKind::NullsafeArrow => "`?->`",
            SyntaxKind::DoubleArrow => "`=>`",
            SyntaxKind::DoubleColon => "`::`",
            SyntaxKind::Backslash => "`\\`",
            SyntaxKind::Question => "`?`",
            SyntaxKind::Colon => "`:`",
            SyntaxKind::Bar => "`|`",
            SyntaxKind::Ampersand => "`&`",
            SyntaxKind::Ellipsis => "`...`",
            SyntaxKind::Equals => "`=`",
            SyntaxKind::PlusEquals => "`+=`",
            SyntaxKind::MinusEquals => "`-=`",
            SyntaxKind::AsteriskEquals => "`*=`",
            SyntaxKind::SlashEquals => "`/=`",
            SyntaxKind::DotEquals => "`.=`",
            SyntaxKind::Dot => "`.`",
            SyntaxKind::Plus => "`+`",
            SyntaxKind::Minus => "`-`",
            SyntaxKind::Asterisk => "`*`",
            SyntaxKind::Slash => "`/`",
            SyntaxKind::Percent => "`%`",
            SyntaxKind::EqualsEquals => "`==`",
            SyntaxKind::EqualsEqualsEquals => "`===`",
            SyntaxKind::ExclamationEquals => "`!=`",
            SyntaxKind::ExclamationEqualsEquals => "`!==`",
            SyntaxKind::LessThan => "`<`",
            SyntaxKind::GreaterThan => "`>`",
            SyntaxKind::LessThanEquals => "`<=`",
            SyntaxKind::GreaterThanEquals => "`>=`",
            SyntaxKind::AmpersandAmpersand => "`&&`",
            SyntaxKind::BarBar => "`||`",
            SyntaxKind::Exclamation => "`!`",
            SyntaxKind::Variable => "variable",
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::IntegerLiteral => "integer literal",
            SyntaxKind::FloatLiteral => "float literal",
            SyntaxKind::SingleQuotedString | SyntaxKind::DoubleQuotedString => "string literal",
            SyntaxKind::Comment => "comment",
            SyntaxKind::InlineHtml => "inline HTML",
            SyntaxKind::EndOfFile => "end of file",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
