//! Lowering of syntactic sugar into core nodes.
//!
//! Called by the parser at the point each form is recognized, so no sugar
//! node ever exists.

use log::trace;

use crate::{
    ast::{
        ast::{Decl, Expr, Stmt},
        expressions::{AssignmentExpr, BinaryOp, LiteralExpr, SymbolExpr},
        statements::{BlockStmt, ExpressionStmt, WhileStmt},
    },
    lexer::tokens::Literal,
    Span,
};

/// `x op= value` becomes `x = x op value`.
pub fn compound_assignment(target: SymbolExpr, operator: BinaryOp, value: Expr) -> Expr {
    trace!("lowering `{} {}= ...`", target.value, operator);

    let span = target.span.to(value.get_span());
    let assignee = target.value.clone();

    Expr::Assignment(AssignmentExpr {
        assignee,
        value: Box::new(Expr::binary(Expr::Symbol(target), operator, value)),
        span,
    })
}

/// `x++` becomes `x = x + 1` and `x--` becomes `x = x - 1`.
///
/// The result is an assignment, so the expression yields the updated value.
pub fn increment(target: SymbolExpr, operator: BinaryOp, operator_span: Span) -> Expr {
    trace!("lowering `{}{}{}`", target.value, operator, operator);

    let span = target.span.to(&operator_span);
    let assignee = target.value.clone();
    let one = Expr::Literal(LiteralExpr {
        value: Literal::Number(1.0),
        span: operator_span,
    });

    Expr::Assignment(AssignmentExpr {
        assignee,
        value: Box::new(Expr::binary(Expr::Symbol(target), operator, one)),
        span,
    })
}

/// `for (init; condition; increment) body` becomes
/// `{ init; while (condition) { body; increment; } }`.
///
/// Both blocks are always built. A missing condition is `true`.
pub fn for_loop(
    initializer: Option<Decl>,
    condition: Option<Expr>,
    increment: Option<Expr>,
    body: Stmt,
    span: Span,
) -> Stmt {
    trace!(
        "lowering for loop (initializer: {}, condition: {}, increment: {})",
        initializer.is_some(),
        condition.is_some(),
        increment.is_some()
    );

    let condition = condition.unwrap_or_else(|| {
        Expr::Literal(LiteralExpr {
            value: Literal::Bool(true),
            span: span.clone(),
        })
    });

    let mut inner = vec![Decl::Stmt(body)];
    if let Some(increment) = increment {
        inner.push(Decl::Stmt(Stmt::Expression(ExpressionStmt {
            span: increment.get_span().clone(),
            expression: increment,
        })));
    }

    let while_stmt = Stmt::While(WhileStmt {
        condition,
        body: Box::new(Stmt::Block(BlockStmt {
            body: inner,
            span: span.clone(),
        })),
        span: span.clone(),
    });

    let mut outer = vec![];
    if let Some(initializer) = initializer {
        outer.push(initializer);
    }
    outer.push(Decl::Stmt(while_stmt));

    Stmt::Block(BlockStmt { body: outer, span })
}
