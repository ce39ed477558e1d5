//! Unit tests for AST nodes and printers.

use std::rc::Rc;

use super::{
    ast::{Decl, Expr, Stmt},
    expressions::{BinaryOp, LiteralExpr, PrefixExpr, PrefixOp, SymbolExpr},
    printer::{expr_to_sexpr, expr_to_source, stmt_to_source},
    statements::{BlockStmt, LetDecl, PrintStmt},
};
use crate::{lexer::tokens::Literal, Position, Span};

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.lc".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

fn number(value: f64) -> Expr {
    Expr::Literal(LiteralExpr {
        value: Literal::Number(value),
        span: span(0, 1),
    })
}

fn symbol(name: &str) -> Expr {
    Expr::Symbol(SymbolExpr {
        value: name.to_string(),
        span: span(0, name.len() as u32),
    })
}

fn negate(right: Expr) -> Expr {
    Expr::Prefix(PrefixExpr {
        operator: PrefixOp::Negate,
        right: Box::new(right),
        span: span(0, 1),
    })
}

#[test]
fn test_initial_value_defaults_to_null() {
    let decl = LetDecl {
        identifier: "x".to_string(),
        initializer: None,
        span: span(0, 6),
    };

    let Expr::Literal(literal) = decl.initial_value() else {
        panic!("expected a literal");
    };
    assert_eq!(literal.value, Literal::Null);
    assert_eq!(literal.span, span(0, 6));
}

#[test]
fn test_initial_value_uses_initializer() {
    let decl = LetDecl {
        identifier: "x".to_string(),
        initializer: Some(number(3.0)),
        span: span(0, 10),
    };

    assert_eq!(decl.initial_value(), number(3.0));
}

#[test]
fn test_binary_span_covers_operands() {
    let left = Expr::Symbol(SymbolExpr {
        value: "a".to_string(),
        span: span(4, 5),
    });
    let right = Expr::Symbol(SymbolExpr {
        value: "b".to_string(),
        span: span(8, 9),
    });

    let expr = Expr::binary(left, BinaryOp::Add, right);
    assert_eq!(expr.get_span(), &span(4, 9));
}

#[test]
fn test_decl_span_of_statement() {
    let stmt = Stmt::Print(PrintStmt {
        value: number(1.0),
        span: span(2, 10),
    });

    let decl: Decl = stmt.into();
    assert_eq!(decl.get_span(), &span(2, 10));
}

#[test]
fn test_operator_symbols() {
    assert_eq!(BinaryOp::GreaterEqual.to_string(), ">=");
    assert_eq!(BinaryOp::NotEqual.symbol(), "!=");
    assert_eq!(PrefixOp::Not.to_string(), "!");
}

#[test]
fn test_printer_parenthesizes_only_when_needed() {
    let left_nested = Expr::binary(
        Expr::binary(number(1.0), BinaryOp::Subtract, number(2.0)),
        BinaryOp::Subtract,
        number(3.0),
    );
    assert_eq!(expr_to_source(&left_nested), "1 - 2 - 3");

    let right_nested = Expr::binary(
        number(1.0),
        BinaryOp::Subtract,
        Expr::binary(number(2.0), BinaryOp::Subtract, number(3.0)),
    );
    assert_eq!(expr_to_source(&right_nested), "1 - (2 - 3)");

    let product = Expr::binary(
        Expr::binary(symbol("a"), BinaryOp::Add, symbol("b")),
        BinaryOp::Multiply,
        symbol("c"),
    );
    assert_eq!(expr_to_source(&product), "(a + b) * c");
    assert_eq!(expr_to_sexpr(&product), "(* (+ a b) c)");
}

#[test]
fn test_printer_separates_double_negation() {
    assert_eq!(expr_to_source(&negate(negate(symbol("x")))), "- -x");
    assert_eq!(expr_to_source(&negate(symbol("x"))), "-x");
}

#[test]
fn test_printer_escapes_strings() {
    let expr = Expr::Literal(LiteralExpr {
        value: Literal::String("say \"hi\"\n".to_string()),
        span: span(0, 1),
    });

    assert_eq!(expr_to_source(&expr), r#""say \"hi\"\n""#);
}

#[test]
fn test_printer_indents_blocks() {
    let inner = Stmt::Block(BlockStmt {
        body: vec![Decl::Stmt(Stmt::Print(PrintStmt {
            value: symbol("x"),
            span: span(0, 1),
        }))],
        span: span(0, 1),
    });
    let outer = Stmt::Block(BlockStmt {
        body: vec![Decl::Stmt(inner)],
        span: span(0, 1),
    });

    assert_eq!(
        stmt_to_source(&outer, 0),
        "{\n    {\n        print x;\n    }\n}"
    );
}
