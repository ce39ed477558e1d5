use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("fn", TokenKind::Fn);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("let", TokenKind::Let);
        map.insert("null", TokenKind::Null);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    And,
    Class,
    Else,
    False,
    Fn,
    For,
    If,
    Let,
    Null,
    Or,
    Print,
    Return,
    True,
    While,
}

impl TokenKind {
    /// Keywords that can only begin a statement or declaration.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fn
                | TokenKind::Let
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(num) => write!(f, "{}", num),
            Literal::String(str) => write!(f, "{}", str),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Null => write!(f, "null"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexeme text. String tokens hold the decoded contents without quotes.
    pub value: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::String => write!(f, "\"{}\"", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: String, span: Span) -> Self {
        let literal = match kind {
            TokenKind::Number => value.parse().ok().map(Literal::Number),
            TokenKind::String => Some(Literal::String(value.clone())),
            TokenKind::True => Some(Literal::Bool(true)),
            TokenKind::False => Some(Literal::Bool(false)),
            TokenKind::Null => Some(Literal::Null),
            _ => None,
        };

        Token {
            kind,
            value,
            literal,
            span,
        }
    }
}
