//! Printers for the AST.
//!
//! `to_source` writes canonical source text. Sugar is never reintroduced, so
//! parsing the output again gives back the same tree. `to_sexpr` writes a
//! span-free S-expression dump used to compare trees structurally.

use crate::lexer::tokens::Literal;

use super::{
    ast::{Decl, Expr, Program, Stmt},
    expressions::{BinaryOp, LogicalOp, PrefixOp},
    statements::{BlockStmt, FnDecl},
};

const INDENT: &str = "    ";

// Binding strength of each expression form, lowest first. Compound
// assignment has no entry because it never survives parsing.
const PREC_ASSIGNMENT: u8 = 1;
const PREC_OR: u8 = 3;
const PREC_AND: u8 = 4;
const PREC_EQUALITY: u8 = 5;
const PREC_COMPARISON: u8 = 6;
const PREC_TERM: u8 = 7;
const PREC_FACTOR: u8 = 8;
const PREC_UNARY: u8 = 9;
const PREC_CALL: u8 = 11;
const PREC_PRIMARY: u8 = 12;

fn make_indent(level: usize) -> String {
    INDENT.repeat(level)
}

/// Prints a program as source, one top-level declaration per line.
pub fn to_source(program: &Program) -> String {
    let mut out = String::new();
    for decl in &program.body {
        out.push_str(&decl_to_source(decl, 0));
        out.push('\n');
    }
    out
}

/// Prints a declaration. Only lines after the first are indented, the caller
/// owns the indentation of the first line.
pub fn decl_to_source(decl: &Decl, level: usize) -> String {
    match decl {
        Decl::Let(decl) => match &decl.initializer {
            Some(init) => format!("let {} = {};", decl.identifier, expr_to_source(init)),
            None => format!("let {};", decl.identifier),
        },
        Decl::Fn(decl) => format!("fn {}", function_to_source(decl, level)),
        Decl::Class(decl) => {
            if decl.methods.is_empty() {
                return format!("class {} {{}}", decl.identifier);
            }

            let mut out = format!("class {} {{\n", decl.identifier);
            for method in &decl.methods {
                out.push_str(&make_indent(level + 1));
                out.push_str(&function_to_source(method, level + 1));
                out.push('\n');
            }
            out.push_str(&make_indent(level));
            out.push('}');
            out
        }
        Decl::Stmt(stmt) => stmt_to_source(stmt, level),
    }
}

fn function_to_source(decl: &FnDecl, level: usize) -> String {
    format!(
        "{}({}) {}",
        decl.identifier,
        decl.parameters.join(", "),
        block_to_source(&decl.body, level)
    )
}

fn block_to_source(block: &BlockStmt, level: usize) -> String {
    if block.body.is_empty() {
        return String::from("{}");
    }

    let mut out = String::from("{\n");
    for decl in block.iter() {
        out.push_str(&make_indent(level + 1));
        out.push_str(&decl_to_source(decl, level + 1));
        out.push('\n');
    }
    out.push_str(&make_indent(level));
    out.push('}');
    out
}

pub fn stmt_to_source(stmt: &Stmt, level: usize) -> String {
    match stmt {
        Stmt::Expression(stmt) => format!("{};", expr_to_source(&stmt.expression)),
        Stmt::Block(block) => block_to_source(block, level),
        Stmt::Return(stmt) => format!("return {};", expr_to_source(&stmt.value)),
        Stmt::Print(stmt) => format!("print {};", expr_to_source(&stmt.value)),
        Stmt::If(stmt) => {
            let mut out = format!(
                "if ({}) {}",
                expr_to_source(&stmt.condition),
                stmt_to_source(&stmt.then_body, level)
            );
            if let Some(else_body) = &stmt.else_body {
                out.push_str(" else ");
                out.push_str(&stmt_to_source(else_body, level));
            }
            out
        }
        Stmt::While(stmt) => format!(
            "while ({}) {}",
            expr_to_source(&stmt.condition),
            stmt_to_source(&stmt.body, level)
        ),
    }
}

pub fn expr_to_source(expr: &Expr) -> String {
    write_expr(expr, 0)
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Assignment(_) => PREC_ASSIGNMENT,
        Expr::Logical(expr) => logical_precedence(expr.operator),
        Expr::Binary(expr) => binary_precedence(expr.operator),
        Expr::Prefix(_) => PREC_UNARY,
        Expr::Call(_) => PREC_CALL,
        Expr::Literal(_) | Expr::Symbol(_) => PREC_PRIMARY,
    }
}

fn logical_precedence(operator: LogicalOp) -> u8 {
    match operator {
        LogicalOp::Or => PREC_OR,
        LogicalOp::And => PREC_AND,
    }
}

fn binary_precedence(operator: BinaryOp) -> u8 {
    match operator {
        BinaryOp::Equal | BinaryOp::NotEqual => PREC_EQUALITY,
        BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
            PREC_COMPARISON
        }
        BinaryOp::Add | BinaryOp::Subtract => PREC_TERM,
        BinaryOp::Multiply | BinaryOp::Divide => PREC_FACTOR,
    }
}

/// Writes `expr`, parenthesized when it binds looser than `min`.
fn write_expr(expr: &Expr, min: u8) -> String {
    let text = match expr {
        Expr::Assignment(expr) => format!(
            "{} = {}",
            expr.assignee,
            write_expr(&expr.value, PREC_ASSIGNMENT)
        ),
        Expr::Logical(expr) => {
            let prec = logical_precedence(expr.operator);
            format!(
                "{} {} {}",
                write_expr(&expr.left, prec),
                expr.operator,
                write_expr(&expr.right, prec + 1)
            )
        }
        Expr::Binary(expr) => {
            let prec = binary_precedence(expr.operator);
            format!(
                "{} {} {}",
                write_expr(&expr.left, prec),
                expr.operator,
                write_expr(&expr.right, prec + 1)
            )
        }
        Expr::Prefix(expr) => {
            let right = write_expr(&expr.right, PREC_UNARY);
            // `- -x` must not collapse into the `--` token
            if expr.operator == PrefixOp::Negate && right.starts_with('-') {
                format!("{} {}", expr.operator, right)
            } else {
                format!("{}{}", expr.operator, right)
            }
        }
        Expr::Call(expr) => {
            let arguments: Vec<String> = expr.arguments.iter().map(expr_to_source).collect();
            format!(
                "{}({})",
                write_expr(&expr.callee, PREC_CALL),
                arguments.join(", ")
            )
        }
        Expr::Literal(expr) => literal_to_source(&expr.value),
        Expr::Symbol(expr) => expr.value.clone(),
    };

    if precedence(expr) < min {
        format!("({})", text)
    } else {
        text
    }
}

fn literal_to_source(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => {
            let mut out = String::from("\"");
            for c in value.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    '\r' => out.push_str("\\r"),
                    '\0' => out.push_str("\\0"),
                    c => out.push(c),
                }
            }
            out.push('"');
            out
        }
        other => other.to_string(),
    }
}

// S-EXPRESSIONS

/// Dumps every top-level declaration as an S-expression, one per line.
pub fn to_sexpr(program: &Program) -> String {
    program
        .body
        .iter()
        .map(decl_to_sexpr)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn decl_to_sexpr(decl: &Decl) -> String {
    match decl {
        Decl::Let(decl) => match &decl.initializer {
            Some(init) => format!("(let {} {})", decl.identifier, expr_to_sexpr(init)),
            None => format!("(let {})", decl.identifier),
        },
        Decl::Fn(decl) => function_to_sexpr(decl),
        Decl::Class(decl) => {
            let mut out = format!("(class {}", decl.identifier);
            for method in &decl.methods {
                out.push(' ');
                out.push_str(&function_to_sexpr(method));
            }
            out.push(')');
            out
        }
        Decl::Stmt(stmt) => stmt_to_sexpr(stmt),
    }
}

fn function_to_sexpr(decl: &FnDecl) -> String {
    format!(
        "(fn {} ({}) {})",
        decl.identifier,
        decl.parameters.join(" "),
        block_to_sexpr(&decl.body)
    )
}

fn block_to_sexpr(block: &BlockStmt) -> String {
    let mut out = String::from("(block");
    for decl in block.iter() {
        out.push(' ');
        out.push_str(&decl_to_sexpr(decl));
    }
    out.push(')');
    out
}

pub fn stmt_to_sexpr(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(stmt) => format!("(expr {})", expr_to_sexpr(&stmt.expression)),
        Stmt::Block(block) => block_to_sexpr(block),
        Stmt::Return(stmt) => format!("(return {})", expr_to_sexpr(&stmt.value)),
        Stmt::Print(stmt) => format!("(print {})", expr_to_sexpr(&stmt.value)),
        Stmt::If(stmt) => match &stmt.else_body {
            Some(else_body) => format!(
                "(if {} {} {})",
                expr_to_sexpr(&stmt.condition),
                stmt_to_sexpr(&stmt.then_body),
                stmt_to_sexpr(else_body)
            ),
            None => format!(
                "(if {} {})",
                expr_to_sexpr(&stmt.condition),
                stmt_to_sexpr(&stmt.then_body)
            ),
        },
        Stmt::While(stmt) => format!(
            "(while {} {})",
            expr_to_sexpr(&stmt.condition),
            stmt_to_sexpr(&stmt.body)
        ),
    }
}

pub fn expr_to_sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Assignment(expr) => {
            format!("(= {} {})", expr.assignee, expr_to_sexpr(&expr.value))
        }
        Expr::Logical(expr) => format!(
            "({} {} {})",
            expr.operator,
            expr_to_sexpr(&expr.left),
            expr_to_sexpr(&expr.right)
        ),
        Expr::Binary(expr) => format!(
            "({} {} {})",
            expr.operator,
            expr_to_sexpr(&expr.left),
            expr_to_sexpr(&expr.right)
        ),
        Expr::Prefix(expr) => format!("({} {})", expr.operator, expr_to_sexpr(&expr.right)),
        Expr::Call(expr) => {
            let mut out = format!("(call {}", expr_to_sexpr(&expr.callee));
            for argument in &expr.arguments {
                out.push(' ');
                out.push_str(&expr_to_sexpr(argument));
            }
            out.push(')');
            out
        }
        Expr::Literal(expr) => literal_to_source(&expr.value),
        Expr::Symbol(expr) => expr.value.clone(),
    }
}
