use std::fmt::Display;

use crate::{
    lexer::tokens::{Literal, TokenKind},
    Span,
};

use super::ast::Expr;

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        }
    }

    /// Arithmetic operator behind a compound assignment (`+=` is `+`).
    pub fn from_compound(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PlusEquals => Some(BinaryOp::Add),
            TokenKind::MinusEquals => Some(BinaryOp::Subtract),
            TokenKind::StarEquals => Some(BinaryOp::Multiply),
            TokenKind::SlashEquals => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    /// Arithmetic operator behind a postfix `++` or `--`.
    pub fn from_increment(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PlusPlus => Some(BinaryOp::Add),
            TokenKind::MinusMinus => Some(BinaryOp::Subtract),
            _ => None,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    Not,
    Negate,
}

impl PrefixOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Negate => "-",
        }
    }

    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Not => Some(PrefixOp::Not),
            TokenKind::Dash => Some(PrefixOp::Negate),
            _ => None,
        }
    }
}

impl Display for PrefixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// LITERALS

/// Number, string, boolean or `null` constant.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Symbol Expression
/// A bare identifier read as a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// OPERATIONS

/// `left op right` for the arithmetic, comparison and equality tiers.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: LogicalOp,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOp,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Assignment Expression
/// The target is always a bare name. Compound assignment and `++`/`--`
/// arrive here with a `BinaryExpr` value; the expression evaluates to the
/// value just stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: String,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
