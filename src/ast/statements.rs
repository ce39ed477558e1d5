use std::slice::Iter;

use crate::{lexer::tokens::Literal, Span};

use super::{
    ast::{Decl, Expr, Stmt},
    expressions::LiteralExpr,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Decl>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Decl> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `return expr;`. There is no bare `return;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

/// Also the lowered form of every `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

// DECLARATIONS

#[derive(Debug, Clone, PartialEq)]
pub struct LetDecl {
    pub identifier: String,
    /// `None` for `let x;`.
    pub initializer: Option<Expr>,
    pub span: Span,
}

impl LetDecl {
    /// The value the variable starts with. An uninitialized `let` binds `null`.
    pub fn initial_value(&self) -> Expr {
        match &self.initializer {
            Some(expr) => expr.clone(),
            None => Expr::Literal(LiteralExpr {
                value: Literal::Null,
                span: self.span.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub identifier: String,
    pub parameters: Vec<String>,
    pub body: BlockStmt,
    pub span: Span,
}

/// Methods only: the grammar has no fields and no superclass clause.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub identifier: String,
    pub methods: Vec<FnDecl>,
    pub span: Span,
}
