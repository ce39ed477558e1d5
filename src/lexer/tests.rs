//! Unit tests for the scanner.

use super::{
    lexer::tokenize,
    tokens::{Literal, TokenKind},
};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lc".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    use TokenKind::*;

    assert_eq!(
        kinds("and class else false fn for if let null or print return true while"),
        vec![
            And, Class, Else, False, Fn, For, If, Let, Null, Or, Print, Return, True, While, EOF
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase lettuce".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "lettuce", "EOF"]
    );
    assert!(tokens[..6].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 2.75 0 100.5".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].value, "2.75");
    assert_eq!(tokens[1].literal, Some(Literal::Number(2.75)));
    assert_eq!(tokens[3].literal, Some(Literal::Number(100.5)));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].literal, Some(Literal::String("multiple words".to_string())));
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "quote\"test""#.to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "quote\"test");
}

#[test]
fn test_tokenize_string_span_covers_quotes() {
    let source = r#"print "a\nb";"#.to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 6);
    assert_eq!(tokens[1].span.end.0, 12);
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].span.start.0, 12);
}

#[test]
fn test_tokenize_operators() {
    use TokenKind::*;

    assert_eq!(
        kinds("+ - * / == != < > <= >= = !"),
        vec![
            Plus, Dash, Star, Slash, Equals, NotEquals, Less, Greater, LessEquals, GreaterEquals,
            Assignment, Not, EOF
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    use TokenKind::*;

    assert_eq!(
        kinds("++ -- += -= *= /="),
        vec![PlusPlus, MinusMinus, PlusEquals, MinusEquals, StarEquals, SlashEquals, EOF]
    );
    // Longest match first
    assert_eq!(kinds("---"), vec![MinusMinus, Dash, EOF]);
    assert_eq!(kinds("x++;"), vec![Identifier, PlusPlus, Semicolon, EOF]);
}

#[test]
fn test_tokenize_punctuation() {
    use TokenKind::*;

    assert_eq!(
        kinds("( ) { } , ;"),
        vec![OpenParen, CloseParen, OpenCurly, CloseCurly, Comma, Semicolon, EOF]
    );
}

#[test]
fn test_tokenize_comments() {
    use TokenKind::*;

    assert_eq!(
        kinds("let x = 5; // trailing\n/* block\n comment */ print x;"),
        vec![Let, Identifier, Assignment, Number, Semicolon, Print, Identifier, Semicolon, EOF]
    );
    assert_eq!(kinds("1 /* never closed"), vec![Number, EOF]);
}

#[test]
fn test_tokenize_positions() {
    let source = "let x\n  = 1;".to_string();
    let tokens = tokenize(source, Some("test.lc".to_string())).unwrap();

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(*tokens[2].span.start.1, "test.lc");
    assert_eq!(tokens.last().unwrap().span.start.0, 12);
}

#[test]
fn test_tokenize_default_file_name() {
    let tokens = tokenize("1".to_string(), None).unwrap();
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let result = tokenize("let x = @".to_string(), Some("test.lc".to_string()));

    let error = result.unwrap_err();
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_unterminated_string() {
    let result = tokenize("print \"oops;".to_string(), Some("test.lc".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 6);
}
