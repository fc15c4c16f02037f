#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn lex(source: &str) -> Vec<Token> {
    Tokenizer::new(source)
        .collect::<Result<Vec<_>, _>>()
        .expect("source should tokenize")
}

fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn lex_err(source: &str) -> LexError {
    Tokenizer::new(source)
        .find_map(Result::err)
        .expect("source should fail to tokenize")
}

#[test]
fn test_lex_basic() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_lexemes("float x = 42;"),
        vec![
            (TypeKeyword, "float".into()),
            (Identifier, "x".into()),
            (Operator, "=".into()),
            (Number, "42".into()),
            (Operator, ";".into()),
            (Eof, std::string::String::new()),
        ]
    );
}

#[test]
fn test_type_keywords_whole_word_only() {
    use TokenKind::*;
    let tokens = kinds_and_lexemes("float floaty vector entity_ string void");
    assert_eq!(
        tokens.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        vec![
            TypeKeyword,
            Identifier,
            TypeKeyword,
            Identifier,
            TypeKeyword,
            TypeKeyword,
            Eof
        ]
    );
    assert_eq!(tokens[1].1, "floaty");
}

#[test]
fn test_numbers() {
    let tokens = kinds_and_lexemes("3 3.25 10.");
    assert_eq!(tokens[0], (TokenKind::Number, "3".into()));
    assert_eq!(tokens[1], (TokenKind::Number, "3.25".into()));
    // a trailing dot is not part of the number
    assert_eq!(tokens[2], (TokenKind::Number, "10".into()));
    assert_eq!(tokens[3], (TokenKind::Operator, ".".into()));
}

#[test]
fn test_maximal_munch_operators() {
    let lexemes: Vec<String> = lex("a==b != c<=d>=e += -= *= /= && || ... < = !")
        .into_iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(
        lexemes,
        vec!["==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "&&", "||", "...", "<", "=", "!"]
    );
}

#[test]
fn test_unknown_characters_become_operators() {
    let tokens = kinds_and_lexemes("@ % ` é");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Operator, "@".into()),
            (TokenKind::Operator, "%".into()),
            (TokenKind::Operator, "`".into()),
            (TokenKind::Operator, "é".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_identifier_truncated_to_32_chars() {
    let long = "a".repeat(40);
    let tokens = lex(&format!("{long} b"));
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "a".repeat(32));
    // the excess is consumed, not split into a second identifier
    assert_eq!(tokens[0].span, Span::new(0, 40));
    assert_eq!(tokens[1].lexeme, "b");
}

#[test]
fn test_comments_are_skipped() {
    let tokens = kinds_and_lexemes("a // line\n/* block\n * comment */ b");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "a".into()),
            (TokenKind::Identifier, "b".into()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_string_literal_with_escapes() {
    let tokens = lex(r#"bprint("hi \"there\"\n");"#);
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].lexeme, "hi \"there\"\n");
    assert_eq!(tokens[2].span, Span::new(7, 23));
    assert!(tokens[3].is_op(")"));
}

#[test]
fn test_vector_literal() {
    let tokens = lex("v = '0  -1 2.5';");
    assert_eq!(tokens[2].kind, TokenKind::Vector);
    assert_eq!(tokens[2].lexeme, "0 -1 2.5");
    assert!(tokens[3].is_op(";"));
}

#[test]
fn test_positions_are_one_based_lines_and_columns() {
    let tokens = lex("float x;\n  void() main;");
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 7), (1, 8), (2, 3), (2, 7), (2, 8), (2, 10), (2, 14), (2, 15)]
    );
}

#[test]
fn test_columns_count_characters() {
    let tokens = lex("\"é\" x");
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
}

#[test]
fn test_eof_repeats_through_cursor_api() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.next_token().unwrap().lexeme, "x");
    let first = tokenizer.next_token().unwrap();
    let second = tokenizer.next_token().unwrap();
    assert!(first.is_eof());
    assert_eq!(first, second);
    assert_eq!(first.span, Span::point(1));
}

#[test]
fn test_iterator_ends_after_eof() {
    let mut tokenizer = Tokenizer::new("");
    assert!(tokenizer.next().unwrap().unwrap().is_eof());
    assert!(tokenizer.next().is_none());
    assert!(tokenizer.next().is_none());
}

#[test]
fn test_unterminated_string() {
    let err = lex_err("x = \"abc\ny;");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 5));
    assert_eq!(err.span, Span::new(4, 5));

    let err = lex_err("\"never closed");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
}

#[test]
fn test_unterminated_block_comment() {
    let err = lex_err("a\n  /* no end");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!((err.line, err.column), (2, 3));
}

#[test]
fn test_malformed_vectors() {
    let err = lex_err("'1 2'");
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedVector {
            reason: "expected 3 components, found 2".into()
        }
    );

    let err = lex_err("'1 x 2'");
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedVector {
            reason: "`x` is not a number".into()
        }
    );

    let err = lex_err("'1 2 3\n'");
    assert_eq!(
        err.kind,
        LexErrorKind::MalformedVector {
            reason: "missing closing `'`".into()
        }
    );
}

#[test]
fn test_lexing_resumes_after_malformed_vector() {
    let results: Vec<_> = Tokenizer::new("'1' y").collect();
    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap().lexeme, "y");
    assert!(results[2].as_ref().unwrap().is_eof());
}

#[test]
fn test_vector_component_shapes() {
    assert!(is_vector_component("0"));
    assert!(is_vector_component("-12"));
    assert!(is_vector_component("3.5"));
    assert!(!is_vector_component("-"));
    assert!(!is_vector_component("1."));
    assert!(!is_vector_component(".5"));
    assert!(!is_vector_component("1e3"));
}
