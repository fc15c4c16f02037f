#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use qc_diagnostic::Severity;
use qc_ir::Span;
use qc_lexer::LexErrorKind;

#[test]
fn test_parse_empty_source() {
    let module = parse("").unwrap();
    assert!(module.is_empty());
    let module = parse("  // nothing\n/* here */").unwrap();
    assert!(module.is_empty());
}

#[test]
fn test_parse_module_order() {
    let module = parse("float x;\nx = 1 + 2 * 3;\nf(x);").unwrap();
    assert_eq!(
        module.to_string(),
        "(decl float x)\n(= x (+ 1 (* 2 3)))\n(call f x)"
    );
}

#[test]
fn test_parse_expression_requires_whole_input() {
    assert_eq!(parse_expression("a.b + 1").unwrap().to_string(), "(+ (. a b) 1)");
    let err = parse_expression("a; b").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Syntax {
            expected: "end of input".into(),
            found: "`;`".into(),
        }
    );
}

#[test]
fn test_identical_source_parses_identically() {
    let source = "void() main = { local float i = 0; while (i < 3) i += 1; };";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn test_lexical_errors_surface_as_parse_errors() {
    let err = parse("x = \"unterminated;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Lexical(LexErrorKind::UnterminatedString));
    assert_eq!((err.line, err.column), (1, 5));
    assert_eq!(err.code().as_str(), "E0001");

    // the first token is read eagerly
    let err = parse("/* open").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Lexical(LexErrorKind::UnterminatedComment));
}

#[test]
fn test_long_identifier_is_truncated() {
    let name = "a".repeat(40);
    let module = parse(&format!("{name} = 1;")).unwrap();
    assert_eq!(module.to_string(), format!("(= {} 1)", "a".repeat(32)));
}

#[test]
fn test_parse_with_custom_grammar() {
    let mut builder = quakec_builder();
    builder.infix("%", 60, qc_ir::BinaryOp::Mul);
    let grammar = builder.build();

    let module = parse_with("x = a % b;", &grammar, ParserConfig::default()).unwrap();
    assert_eq!(module.to_string(), "(= x (* a b))");
    assert!(parse("x = a % b;").is_err());
}

#[test]
fn test_parser_value_can_be_driven_directly() {
    let grammar = Grammar::quakec();
    let mut parser = Parser::new("1 + 2", grammar, ParserConfig::default()).unwrap();
    assert_eq!(parser.parse_whole_expression().unwrap().to_string(), "(+ 1 2)");

    let mut parser = Parser::new("{ f(); }", grammar, ParserConfig::default()).unwrap();
    let block = parser.parse_block().unwrap();
    assert_eq!(block.to_string(), "(block (call f))");
}

#[test]
fn test_error_to_diagnostic() {
    let err = parse("float x;\n1 = 2;").unwrap_err();
    let diag = err.to_diagnostic();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.code.as_str(), "E1003");
    assert_eq!(diag.primary_span(), Some(Span::new(11, 12)));
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn test_error_display_includes_position() {
    let err = parse("\n\n  a @ b;").unwrap_err();
    assert_eq!(err.to_string(), "unknown symbol: `@` at line 3, column 5");
}
