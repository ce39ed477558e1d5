use log::debug;

use crate::{
    ast::{
        ast::{Decl, Stmt},
        statements::{
            BlockStmt, ClassDecl, ExpressionStmt, FnDecl, IfStmt, LetDecl, PrintStmt, ReturnStmt,
            WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    desugar,
    expr::parse_expr,
    lookups::{DECL_LOOKUP, STMT_LOOKUP},
    parser::Parser,
};

/// Parses one declaration and handles any error it raises.
///
/// Returns `Ok(None)` when the declaration was dropped after an error. `Err`
/// only escapes in fail-fast mode.
pub fn parse_declaration(parser: &mut Parser) -> Result<Option<Decl>, Error> {
    let kind = parser.current_token_kind();
    debug!("declaration at {} starting with {}", parser.get_position().0, kind);

    let result = match DECL_LOOKUP.get(&kind) {
        Some(handler) => handler(parser),
        None => parse_stmt(parser).map(Decl::Stmt),
    };

    match result {
        Ok(decl) => Ok(Some(decl)),
        Err(error) => {
            parser.recover(error)?;
            Ok(None)
        }
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| match STMT_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    })
}

pub fn parse_let_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start.clone();
    let identifier = parser
        .expect(TokenKind::Identifier, "variable name after `let`")?
        .value;

    let initializer = if parser.eat(TokenKind::Assignment) {
        Some(parse_expr(parser)?)
    } else {
        None
    };

    let end = parser
        .expect(TokenKind::Semicolon, "`;` after variable declaration")?
        .span
        .end;

    Ok(Decl::Let(LetDecl {
        identifier,
        initializer,
        span: Span { start, end },
    }))
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start.clone();
    Ok(Decl::Fn(parse_function(parser, start)?))
}

/// `name(params) { body }`, shared by functions and methods.
fn parse_function(parser: &mut Parser, start: Position) -> Result<FnDecl, Error> {
    let identifier = parser.expect(TokenKind::Identifier, "function name")?.value;
    parser.expect(TokenKind::OpenParen, "`(` after function name")?;

    let mut parameters = vec![];
    if !parser.check(TokenKind::CloseParen) {
        loop {
            let limit = parser.options().max_arguments;
            if parameters.len() == limit {
                let position = parser.get_position();
                parser.report(Error::new(ErrorImpl::TooManyArguments { limit }, position));
            }

            parameters.push(parser.expect(TokenKind::Identifier, "parameter name")?.value);
            if !parser.eat(TokenKind::Comma) {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen, "`)` after parameters")?;

    let body = parse_block(parser, "function body")?;

    Ok(FnDecl {
        identifier,
        parameters,
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        body,
    })
}

pub fn parse_class_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start.clone();
    let identifier = parser.expect(TokenKind::Identifier, "class name")?.value;
    let open = parser.expect(TokenKind::OpenCurly, "`{` before class body")?;

    let methods = parser.enclosed(|parser| {
        let mut methods = vec![];
        while !parser.check(TokenKind::CloseCurly) && parser.has_tokens() {
            let method_start = parser.get_position();
            // Methods may be written with or without `fn`
            parser.eat(TokenKind::Fn);
            match parse_function(parser, method_start) {
                Ok(method) => methods.push(method),
                Err(error) => parser.recover(error)?,
            }
        }
        Ok(methods)
    })?;

    if !parser.check(TokenKind::CloseCurly) {
        return Err(Error::new(
            ErrorImpl::UnterminatedBlock {
                construct: String::from("class body"),
            },
            open.span.start,
        ));
    }
    let end = parser.advance().span.end.clone();

    Ok(Decl::Class(ClassDecl {
        identifier,
        methods,
        span: Span { start, end },
    }))
}

/// `{ declaration* }`. `construct` names the block in diagnostics.
pub fn parse_block(parser: &mut Parser, construct: &str) -> Result<BlockStmt, Error> {
    parser.nested(|parser| parse_block_body(parser, construct))
}

fn parse_block_body(parser: &mut Parser, construct: &str) -> Result<BlockStmt, Error> {
    let open = parser.expect(TokenKind::OpenCurly, &format!("`{{` before {}", construct))?;

    let body = parser.enclosed(|parser| {
        let mut body = vec![];
        while !parser.check(TokenKind::CloseCurly) && parser.has_tokens() {
            if let Some(decl) = parse_declaration(parser)? {
                body.push(decl);
            }
        }
        Ok(body)
    })?;

    if !parser.check(TokenKind::CloseCurly) {
        return Err(Error::new(
            ErrorImpl::UnterminatedBlock {
                construct: construct.to_string(),
            },
            open.span.start,
        ));
    }
    let end = parser.advance().span.end.clone();

    Ok(BlockStmt {
        body,
        span: Span {
            start: open.span.start,
            end,
        },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser, "block")?))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let value = parse_expr(parser)?;
    let end = parser
        .expect(TokenKind::Semicolon, "`;` after return value")?
        .span
        .end;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span { start, end },
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let value = parse_expr(parser)?;
    let end = parser
        .expect(TokenKind::Semicolon, "`;` after value")?
        .span
        .end;

    Ok(Stmt::Print(PrintStmt {
        value,
        span: Span { start, end },
    }))
}

/// `else` binds to the nearest `if` still missing one.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect(TokenKind::OpenParen, "`(` after `if`")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "`)` after if condition")?;

    let then_body = parse_stmt(parser)?;
    let else_body = if parser.eat(TokenKind::Else) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    let end = match &else_body {
        Some(stmt) => stmt.get_span().end.clone(),
        None => then_body.get_span().end.clone(),
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        span: Span { start, end },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect(TokenKind::OpenParen, "`(` after `while`")?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen, "`)` after while condition")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        body: Box::new(body),
    }))
}

/// `for (init; condition; increment) body`, lowered on the spot.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect(TokenKind::OpenParen, "`(` after `for`")?;

    let initializer = if parser.eat(TokenKind::Semicolon) {
        None
    } else if parser.check(TokenKind::Let) {
        Some(parse_let_decl(parser)?)
    } else {
        Some(Decl::Stmt(parse_expression_stmt(parser)?))
    };

    let condition = if parser.check(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon, "`;` after loop condition")?;

    let increment = if parser.check(TokenKind::CloseParen) {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::CloseParen, "`)` after for clauses")?;

    let body = parse_stmt(parser)?;
    let span = Span {
        start,
        end: body.get_span().end.clone(),
    };

    Ok(desugar::for_loop(initializer, condition, increment, body, span))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;
    let end = parser
        .expect(TokenKind::Semicolon, "`;` after expression")?
        .span
        .end;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end,
        },
        expression,
    }))
}
