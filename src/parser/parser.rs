//! Parser core: the token cursor, the diagnostics collector and the
//! top-level declaration loop.
//!
//! Errors raised while parsing a declaration unwind with `?` to the nearest
//! declaration boundary. There the error is recorded and the cursor is moved
//! to the next likely statement start, so one pass can report several
//! independent problems.

use log::{debug, info};

use crate::{
    ast::ast::{Decl, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_declaration;

/// Default cap on call arguments and function parameters.
pub const DEFAULT_MAX_ARGUMENTS: usize = 255;

/// Default cap on nested expressions, statements and blocks.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What the parser does after recording an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Skip to the next statement and keep going.
    #[default]
    Synchronize,
    /// Stop at the first error and return what was parsed so far.
    FailFast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    pub recovery: RecoveryMode,
    pub max_arguments: usize,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            recovery: RecoveryMode::default(),
            max_arguments: DEFAULT_MAX_ARGUMENTS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_recovery(mut self, recovery: RecoveryMode) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn with_max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Outcome of a parse: a best-effort tree and every diagnostic, in source
/// order of discovery. The tree is complete when `errors` is empty.
#[derive(Debug)]
pub struct ParseResult {
    pub program: Program,
    pub errors: Vec<Error>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Program, Vec<Error>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Parsing state: the token stream, a cursor into it and the diagnostics
/// collected so far.
pub struct Parser {
    /// Always ends with exactly one EOF token
    tokens: Vec<Token>,
    /// Index of the current token, never past the EOF token
    pos: usize,
    errors: Vec<Error>,
    /// Tokens found after EOF, reported once the program is parsed
    trailing: Option<Error>,
    options: ParseOptions,
    /// Current nesting of expressions, statements and blocks
    depth: usize,
    /// Blocks and class bodies whose `}` has not been reached yet
    open_bodies: usize,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// Anything after the first EOF token is dropped and reported once the
    /// program itself has been parsed. A stream without an EOF token gets one
    /// appended.
    pub fn new(mut tokens: Vec<Token>, options: ParseOptions) -> Self {
        let mut trailing = None;

        match tokens.iter().position(|token| token.kind == TokenKind::EOF) {
            Some(index) => {
                trailing = tokens.get(index + 1).map(|token| {
                    Error::new(
                        ErrorImpl::TrailingTokensAfterProgram {
                            found: token.to_string(),
                        },
                        token.span.start.clone(),
                    )
                });
                tokens.truncate(index + 1);
            }
            None => {
                let position = tokens
                    .last()
                    .map(|token| token.span.end.clone())
                    .unwrap_or_else(Position::null);
                tokens.push(Token::new(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: position.clone(),
                        end: position,
                    },
                ));
            }
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            trailing,
            options,
            depth: 0,
            open_bodies: 0,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. The cursor
    /// stays on EOF once it gets there.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or fails with `UnexpectedToken`.
    ///
    /// `expected` describes what was wanted, e.g. "`;` after expression".
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }

        let token = self.current_token();
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
            },
            token.span.start.clone(),
        ))
    }

    /// Returns true until the cursor reaches EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Records an error without unwinding.
    pub fn report(&mut self, error: Error) {
        debug!("recorded {}: {}", error.get_error_name(), error);
        self.errors.push(error);
    }

    /// Runs `parse` one nesting level deeper, failing with `NestingTooDeep`
    /// once `max_depth` levels are open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let limit = self.options.max_depth;
        if self.depth >= limit {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Runs `parse` over the inside of a block or class body. While it runs,
    /// synchronization leaves the body's `}` in place.
    pub fn enclosed<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.open_bodies += 1;
        let result = parse(self);
        self.open_bodies -= 1;
        result
    }

    /// Handles an error that reached a declaration boundary. In fail-fast mode
    /// the error is handed back to keep unwinding, and so is `NestingTooDeep`
    /// in either mode.
    pub fn recover(&mut self, error: Error) -> Result<(), Error> {
        match self.options.recovery {
            RecoveryMode::FailFast => Err(error),
            RecoveryMode::Synchronize if error.is_fatal() => Err(error),
            RecoveryMode::Synchronize => {
                self.report(error);
                self.synchronize();
                Ok(())
            }
        }
    }

    /// Skips tokens until just after a `;`, or until the next token is a
    /// keyword that starts a statement. Inside a block or class body it also
    /// stops before a `}`. At the top level a `}` is skipped like any other
    /// token.
    pub fn synchronize(&mut self) {
        let from = self.get_position();
        let in_body = self.open_bodies > 0;

        // A `}` inside a body belongs to that body
        let keep_brace = in_body && self.check(TokenKind::CloseCurly);
        if !keep_brace && self.advance().kind == TokenKind::Semicolon {
            debug!("synchronized from {} to {}", from.0, self.get_position().0);
            return;
        }

        while self.has_tokens() {
            let kind = self.current_token_kind();
            if (in_body && kind == TokenKind::CloseCurly) || kind.starts_statement() {
                break;
            }

            if self.advance().kind == TokenKind::Semicolon {
                break;
            }
        }

        debug!("synchronized from {} to {}", from.0, self.get_position().0);
    }

    /// True once fail-fast mode has seen an error.
    pub fn should_stop(&self) -> bool {
        self.options.recovery == RecoveryMode::FailFast && !self.errors.is_empty()
    }

    fn eof_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null)
    }
}

/// Parses a token stream with the default options.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    parse_with_options(tokens, ParseOptions::default())
}

/// Parses a token stream into a program.
///
/// Never panics on malformed input: the result holds either a complete tree
/// or at least one error next to a partial tree.
pub fn parse_with_options(tokens: Vec<Token>, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::new(tokens, options);
    info!(
        "parsing {} tokens ({:?} recovery)",
        parser.tokens.len(),
        parser.options.recovery
    );

    let start = parser.get_position();
    let mut body: Vec<Decl> = vec![];

    while parser.has_tokens() && !parser.should_stop() {
        if parser.check(TokenKind::CloseCurly) {
            let token = parser.advance().clone();
            parser.report(Error::new(
                ErrorImpl::TrailingTokensAfterProgram {
                    found: token.to_string(),
                },
                token.span.start,
            ));
            continue;
        }

        match parse_declaration(&mut parser) {
            Ok(Some(decl)) => body.push(decl),
            Ok(None) => {}
            Err(error) => {
                parser.report(error);
                break;
            }
        }
    }

    if let Some(error) = parser.trailing.take() {
        if !parser.should_stop() {
            parser.report(error);
        }
    }

    let program = Program {
        body,
        span: Span {
            start,
            end: parser.eof_position(),
        },
    };

    info!(
        "parsed {} declarations with {} errors",
        program.body.len(),
        parser.errors.len()
    );

    ParseResult {
        program,
        errors: parser.errors,
    }
}
