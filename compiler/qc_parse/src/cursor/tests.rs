#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ParseErrorKind;

#[test]
fn test_advance_returns_previous_token() {
    let mut cursor = Cursor::new("a = 1").unwrap();
    assert_eq!(cursor.current().lexeme, "a");
    let passed = cursor.advance().unwrap();
    assert_eq!(passed.lexeme, "a");
    assert!(cursor.check("="));
}

#[test]
fn test_expect_mismatch_reports_current_token() {
    let mut cursor = Cursor::new("x\n  y").unwrap();
    cursor.advance().unwrap();
    let err = cursor.expect(";").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Syntax {
            expected: "`;`".into(),
            found: "identifier `y`".into(),
        }
    );
    assert_eq!((err.line, err.column), (2, 3));
}

#[test]
fn test_end_is_sticky() {
    let mut cursor = Cursor::new("").unwrap();
    assert!(cursor.is_at_end());
    assert!(cursor.check("(end)"));
    cursor.advance().unwrap();
    assert!(cursor.is_at_end());
    assert!(cursor.expect("(end)").is_ok());
}

#[test]
fn test_eat() {
    let mut cursor = Cursor::new(", x").unwrap();
    assert!(cursor.eat(";").unwrap().is_none());
    assert_eq!(cursor.eat(",").unwrap().map(|t| t.lexeme), Some(",".into()));
    assert!(cursor.check("(name)"));
}

#[test]
fn test_lexical_error_surfaces_on_advance() {
    let mut cursor = Cursor::new("a \"open").unwrap();
    let err = cursor.advance().unwrap_err();
    assert_eq!(err.code(), qc_diagnostic::ErrorCode::E0001);
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn test_token_matches_classes() {
    let tokens: Vec<Token> = qc_lexer::tokenize("float foo 1 \"s\" '1 2 3' else")
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(token_matches(&tokens[0], "(type)"));
    assert!(token_matches(&tokens[0], "float"));
    assert!(token_matches(&tokens[1], "(name)"));
    assert!(token_matches(&tokens[2], "(literal)"));
    assert!(token_matches(&tokens[3], "(literal)"));
    assert!(token_matches(&tokens[4], "(literal)"));
    assert!(token_matches(&tokens[5], "else"));
    assert!(token_matches(&tokens[6], "(end)"));
    assert!(!token_matches(&tokens[1], "(type)"));
}
