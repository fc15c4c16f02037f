use super::*;

#[test]
fn test_codes_per_kind() {
    assert_eq!(LexErrorKind::UnterminatedString.code(), ErrorCode::E0001);
    assert_eq!(LexErrorKind::UnterminatedComment.code(), ErrorCode::E0002);
    let malformed = LexErrorKind::MalformedVector {
        reason: "expected 3 components, found 2".into(),
    };
    assert_eq!(malformed.code(), ErrorCode::E0003);
    assert_eq!(malformed.code().phase(), qc_diagnostic::Phase::Lexer);
}

#[test]
fn test_display_includes_position() {
    let err = LexError::new(LexErrorKind::UnterminatedString, Span::new(4, 9), 2, 5);
    assert_eq!(
        err.to_string(),
        "unterminated string literal at line 2, column 5"
    );
}

#[test]
fn test_to_diagnostic() {
    let err = LexError::new(LexErrorKind::UnterminatedComment, Span::new(0, 2), 1, 1);
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.message, "unterminated block comment");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 2)));
    assert_eq!(diag.helps().count(), 1);
}
