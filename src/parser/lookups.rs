use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{Decl, Stmt},
        expressions::{BinaryOp, LogicalOp},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

/// Precedence tiers, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    CompoundAssignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    IncDec,
    Call,
    Primary,
}

impl BindingPower {
    /// The tier that binds one step tighter.
    pub fn next(self) -> Self {
        match self {
            BindingPower::Default => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::CompoundAssignment,
            BindingPower::CompoundAssignment => BindingPower::LogicalOr,
            BindingPower::LogicalOr => BindingPower::LogicalAnd,
            BindingPower::LogicalAnd => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Comparison,
            BindingPower::Comparison => BindingPower::Term,
            BindingPower::Term => BindingPower::Factor,
            BindingPower::Factor => BindingPower::Unary,
            BindingPower::Unary => BindingPower::IncDec,
            BindingPower::IncDec => BindingPower::Call,
            BindingPower::Call | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

/// Operator for `kind` when it belongs to binary tier `bp`.
pub fn binary_operator(bp: BindingPower, kind: TokenKind) -> Option<BinaryOp> {
    match (bp, kind) {
        (BindingPower::Equality, TokenKind::Equals) => Some(BinaryOp::Equal),
        (BindingPower::Equality, TokenKind::NotEquals) => Some(BinaryOp::NotEqual),
        (BindingPower::Comparison, TokenKind::Less) => Some(BinaryOp::Less),
        (BindingPower::Comparison, TokenKind::LessEquals) => Some(BinaryOp::LessEqual),
        (BindingPower::Comparison, TokenKind::Greater) => Some(BinaryOp::Greater),
        (BindingPower::Comparison, TokenKind::GreaterEquals) => Some(BinaryOp::GreaterEqual),
        (BindingPower::Term, TokenKind::Plus) => Some(BinaryOp::Add),
        (BindingPower::Term, TokenKind::Dash) => Some(BinaryOp::Subtract),
        (BindingPower::Factor, TokenKind::Star) => Some(BinaryOp::Multiply),
        (BindingPower::Factor, TokenKind::Slash) => Some(BinaryOp::Divide),
        _ => None,
    }
}

pub fn logical_operator(bp: BindingPower, kind: TokenKind) -> Option<LogicalOp> {
    match (bp, kind) {
        (BindingPower::LogicalOr, TokenKind::Or) => Some(LogicalOp::Or),
        (BindingPower::LogicalAnd, TokenKind::And) => Some(LogicalOp::And),
        _ => None,
    }
}

pub type DeclHandler = fn(&mut Parser) -> Result<Decl, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

lazy_static! {
    /// Declarations keyed by their leading keyword. Anything else is a statement.
    pub static ref DECL_LOOKUP: DeclLookup = {
        let mut map: DeclLookup = HashMap::new();
        map.insert(TokenKind::Let, parse_let_decl);
        map.insert(TokenKind::Fn, parse_fn_decl);
        map.insert(TokenKind::Class, parse_class_decl);
        map
    };

    /// Statements keyed by their leading token. Anything else is an
    /// expression statement.
    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::OpenCurly, parse_block_stmt);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::Print, parse_print_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::For, parse_for_stmt);
        map
    };
}
