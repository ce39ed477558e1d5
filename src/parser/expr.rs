use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignmentExpr, BinaryOp, CallExpr, LiteralExpr, LogicalExpr, PrefixExpr, PrefixOp,
            SymbolExpr,
        },
        printer::expr_to_source,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, Token, TokenKind},
    Span,
};

use super::{
    desugar,
    lookups::{binary_operator, logical_operator, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

/// Parses an expression at tier `bp` and everything binding tighter.
pub fn parse_tier(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp {
        BindingPower::Default | BindingPower::Assignment => parse_assignment_expr(parser),
        BindingPower::CompoundAssignment => parse_compound_assignment_expr(parser),
        BindingPower::LogicalOr | BindingPower::LogicalAnd => parse_logical_expr(parser, bp),
        BindingPower::Equality
        | BindingPower::Comparison
        | BindingPower::Term
        | BindingPower::Factor => parse_binary_expr(parser, bp),
        BindingPower::Unary => parse_unary_expr(parser),
        BindingPower::IncDec => parse_increment_expr(parser),
        BindingPower::Call => parse_call_expr(parser),
        BindingPower::Primary => parse_primary_expr(parser),
    }
}

/// `target = value`, right-associative.
///
/// Every parenthesized expression, call argument and right-hand side comes
/// through here, so this is where expression nesting is counted.
pub fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let grouped = parser.check(TokenKind::OpenParen);
        let left = parse_tier(parser, BindingPower::CompoundAssignment)?;

        if !parser.eat(TokenKind::Assignment) {
            return Ok(left);
        }

        let value = parse_assignment_expr(parser)?;
        let target = assignment_target(left, grouped)?;

        Ok(Expr::Assignment(AssignmentExpr {
            span: target.span.to(value.get_span()),
            assignee: target.value,
            value: Box::new(value),
        }))
    })
}

/// `target op= value`, lowered to `target = target op value`.
pub fn parse_compound_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let grouped = parser.check(TokenKind::OpenParen);
    let left = parse_tier(parser, BindingPower::LogicalOr)?;

    let Some(operator) = BinaryOp::from_compound(parser.current_token_kind()) else {
        return Ok(left);
    };
    parser.advance();

    let value = parse_assignment_expr(parser)?;
    let target = assignment_target(left, grouped)?;

    Ok(desugar::compound_assignment(target, operator, value))
}

pub fn parse_logical_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_tier(parser, bp.next())?;

    while let Some(operator) = logical_operator(bp, parser.current_token_kind()) {
        parser.advance();
        let right = parse_tier(parser, bp.next())?;

        left = Expr::Logical(LogicalExpr {
            span: left.get_span().to(right.get_span()),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Equality, comparison, term and factor. Operands come from the next tier
/// and fold to the left.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_tier(parser, bp.next())?;

    while let Some(operator) = binary_operator(bp, parser.current_token_kind()) {
        parser.advance();
        let right = parse_tier(parser, bp.next())?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

/// `!` and `-`, right-associative.
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = PrefixOp::from_token_kind(parser.current_token_kind()) else {
        return parse_tier(parser, BindingPower::IncDec);
    };

    let start = parser.advance().span.start.clone();
    let right = parser.nested(parse_unary_expr)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start,
            end: right.get_span().end.clone(),
        },
        operator,
        right: Box::new(right),
    }))
}

/// Postfix `++` and `--`, lowered to `target = target +/- 1`.
pub fn parse_increment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let grouped = parser.check(TokenKind::OpenParen);
    let left = parse_tier(parser, BindingPower::Call)?;

    let Some(operator) = BinaryOp::from_increment(parser.current_token_kind()) else {
        return Ok(left);
    };
    let operator_span = parser.advance().span.clone();

    let target = assignment_target(left, grouped)?;
    Ok(desugar::increment(target, operator, operator_span))
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_tier(parser, BindingPower::Primary)?;

    while parser.eat(TokenKind::OpenParen) {
        expr = finish_call(parser, expr)?;
    }

    Ok(expr)
}

fn finish_call(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if !parser.check(TokenKind::CloseParen) {
        loop {
            let limit = parser.options().max_arguments;
            if arguments.len() == limit {
                let position = parser.get_position();
                parser.report(Error::new(ErrorImpl::TooManyArguments { limit }, position));
            }

            arguments.push(parse_expr(parser)?);
            if !parser.eat(TokenKind::Comma) {
                break;
            }
        }
    }

    let close = parser.expect(TokenKind::CloseParen, "`)` after arguments")?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: callee.get_span().start.clone(),
            end: close.span.end,
        },
        callee: Box::new(callee),
        arguments,
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number
        | TokenKind::String
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null => match literal_value(&token) {
            Some(value) => {
                parser.advance();
                Ok(Expr::Literal(LiteralExpr {
                    value,
                    span: token.span,
                }))
            }
            None => Err(missing_expression(&token)),
        },
        TokenKind::Identifier => {
            parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen, "`)` after expression")?;
            Ok(expr)
        }
        _ => Err(missing_expression(&token)),
    }
}

fn literal_value(token: &Token) -> Option<Literal> {
    if token.literal.is_some() {
        return token.literal.clone();
    }

    match token.kind {
        TokenKind::Number => token.value.parse().ok().map(Literal::Number),
        TokenKind::String => Some(Literal::String(token.value.clone())),
        TokenKind::True => Some(Literal::Bool(true)),
        TokenKind::False => Some(Literal::Bool(false)),
        TokenKind::Null => Some(Literal::Null),
        _ => None,
    }
}

fn missing_expression(token: &Token) -> Error {
    Error::new(
        ErrorImpl::MissingExpression {
            found: token.to_string(),
        },
        token.span.start.clone(),
    )
}

/// Only a bare name can be assigned to. `grouped` is set when the left-hand
/// side started with `(`, which rules out `(a) = 1`.
fn assignment_target(left: Expr, grouped: bool) -> Result<SymbolExpr, Error> {
    match left {
        Expr::Symbol(symbol) if !grouped => Ok(symbol),
        other => {
            let target = match &other {
                Expr::Symbol(symbol) => format!("({})", symbol.value),
                _ => expr_to_source(&other),
            };

            Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget { target },
                other.get_span().start.clone(),
            ))
        }
    }
}
