use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, BinaryOp, CallExpr, LiteralExpr, LogicalExpr, PrefixExpr,
        SymbolExpr,
    },
    statements::{
        BlockStmt, ClassDecl, ExpressionStmt, FnDecl, IfStmt, LetDecl, PrintStmt, ReturnStmt,
        WhileStmt,
    },
};

/// Root of a parsed source unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Decl>,
    pub span: Span,
}

/// Anything that may appear at the top level or directly inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Let(LetDecl),
    Fn(FnDecl),
    Class(ClassDecl),
    Stmt(Stmt),
}

impl Decl {
    pub fn get_span(&self) -> &Span {
        match self {
            Decl::Let(decl) => &decl.span,
            Decl::Fn(decl) => &decl.span,
            Decl::Class(decl) => &decl.span,
            Decl::Stmt(stmt) => stmt.get_span(),
        }
    }
}

impl From<Stmt> for Decl {
    fn from(stmt: Stmt) -> Self {
        Decl::Stmt(stmt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    /// Introduces a new lexical scope.
    Block(BlockStmt),
    Return(ReturnStmt),
    Print(PrintStmt),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Print(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Logical(LogicalExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Call(CallExpr),
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Assignment(expr) => &expr.span,
            Expr::Logical(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
        }
    }

    pub fn binary(left: Expr, operator: BinaryOp, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            span: left.get_span().to(right.get_span()),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}
