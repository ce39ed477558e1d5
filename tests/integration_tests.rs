//! Integration tests for the front end.
//!
//! These tests run source text through the scanner and the parser and check
//! the resulting tree, the collected diagnostics and their rendering.

use frontend::{
    ast::{
        ast::{Decl, Stmt},
        printer::{to_sexpr, to_source},
    },
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_with_options, ParseOptions, ParseResult, RecoveryMode},
    render_error,
};

fn parse_source(source: &str) -> ParseResult {
    let tokens = tokenize(source.to_string(), Some("test.lc".to_string())).unwrap();
    parse(tokens)
}

#[test]
fn test_parse_complete_program() {
    let source = r#"
        // Counts down and reports.
        class Counter {
            init(start) { count = start; }
            fn tick() { count -= 1; return count; }
        }

        fn run(counter, times) {
            for (let i = 0; i < times; i++) {
                if (tick(counter) <= 0) print "done"; else print i;
            }
            return null;
        }

        let c = Counter(3);
        run(c, 5);
    "#;

    let result = parse_source(source);
    assert!(result.is_ok(), "{:?}", result.errors);

    let program = result.program;
    assert_eq!(program.body.len(), 4);
    assert!(matches!(&program.body[0], Decl::Class(class) if class.methods.len() == 2));
    assert!(matches!(&program.body[1], Decl::Fn(function) if function.parameters == ["counter", "times"]));
    assert!(matches!(&program.body[2], Decl::Let(_)));
    assert!(matches!(&program.body[3], Decl::Stmt(Stmt::Expression(_))));

    let Decl::Fn(run) = &program.body[1] else {
        unreachable!()
    };
    assert!(matches!(&run.body.body[0], Decl::Stmt(Stmt::Block(_))));
}

#[test]
fn test_reports_every_independent_error() {
    let source = "let = 1;\nprint 2;\n5 = x;\nfn 1;\nprint 3;\nreturn;";
    let result = parse_source(source);

    let names: Vec<&str> = result
        .errors
        .iter()
        .map(|error| error.get_error_name())
        .collect();
    assert_eq!(
        names,
        vec![
            "UnexpectedToken",
            "InvalidAssignmentTarget",
            "UnexpectedToken",
            "MissingExpression"
        ]
    );
    assert_eq!(to_sexpr(&result.program), "(print 2)\n(print 3)");
}

#[test]
fn test_fail_fast_reports_one_error() {
    let tokens = tokenize("let = 1; 5 = x; return;".to_string(), None).unwrap();
    let result = parse_with_options(
        tokens,
        ParseOptions::default().with_recovery(RecoveryMode::FailFast),
    );

    assert_eq!(result.errors.len(), 1);
    assert!(result.into_result().is_err());
}

#[test]
fn test_render_error() {
    let source = "print 1\nprint 2;";
    let result = parse_source(source);

    assert_eq!(
        render_error(&result.errors[0], source),
        "Error: UnexpectedToken (expected `;` after value, found `print`)\n\
         -> test.lc\n\
         \x20 |\n\
         2 | print 2;\n\
         \x20 | ^"
    );
}

#[test]
fn test_render_error_with_tip() {
    let source = "let a = 1 }";
    let result = parse_source(source);

    let rendered = render_error(&result.errors[0], source);
    assert!(rendered.starts_with(
        "Error: UnexpectedToken (expected `;` after variable declaration, found `}`, did you miss a semicolon?)"
    ));
    assert!(rendered.ends_with("1 | let a = 1 }\n  | ----------^"));

    // Recovery skips the stray `}` without a second diagnostic
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_deep_nesting_is_reported() {
    let depth = 5_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let result = parse_source(&source);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &ErrorImpl::NestingTooDeep { limit: 64 }
    );
    assert!(render_error(&result.errors[0], &source).contains("nesting deeper than 64 levels"));

    let shallow = format!("print {}1{};", "(".repeat(20), ")".repeat(20));
    assert!(parse_source(&shallow).is_ok());
}

#[test]
fn test_error_display() {
    let result = parse_source("print 1\nprint 2;");
    assert_eq!(
        result.errors[0].to_string(),
        "expected `;` after value, found `print` at test.lc:8"
    );
}

#[test]
fn test_scanner_errors_render() {
    let source = "let s = \"open;";
    let error = tokenize(source.to_string(), Some("test.lc".to_string())).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnterminatedString);
    assert!(render_error(&error, source).contains("add a closing `\"`"));
}

#[test]
fn test_printed_source_reparses_to_same_tree() {
    let source = "let x = 1; x += 2; for (;x < 10;) x++; print -(x = 3) * 2;";
    let first = parse_source(source);
    assert!(first.is_ok());

    let second = parse_source(&to_source(&first.program));
    assert!(second.is_ok());
    assert_eq!(to_sexpr(&first.program), to_sexpr(&second.program));
}
