#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use qc_ir::Span;

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, Span::DUMMY, 1, 1)
}

#[test]
fn test_register_keeps_max_binding_power() {
    let mut g = GrammarBuilder::new();
    g.register("+", 50);
    g.register("+", 10);
    assert_eq!(g.register("+", 0).lbp(), 50);
    g.register("+", 70);
    let grammar = g.build();
    assert_eq!(grammar.get("+").unwrap().lbp(), 70);
}

#[test]
fn test_prefix_does_not_lower_infix_binding_power() {
    let mut g = GrammarBuilder::new();
    g.infix("-", 50, BinaryOp::Sub);
    g.prefix("-", 100, UnaryOp::Neg);
    let grammar = g.build();
    let minus = grammar.get("-").unwrap();
    assert_eq!(minus.lbp(), 50);
    assert_eq!(minus.nud(), Some(Nud::Prefix { op: UnaryOp::Neg, bp: 100 }));
    assert_eq!(minus.led(), Some(Led::Infix { op: BinaryOp::Sub, bp: 50 }));
}

#[test]
fn test_behaviors_accumulate() {
    let mut g = GrammarBuilder::new();
    g.group();
    g.call(80);
    g.stmt("(", Std::Empty);
    let grammar = g.build();
    let paren = grammar.get("(").unwrap();
    assert_eq!(paren.id(), "(");
    assert_eq!(paren.lbp(), 80);
    assert_eq!(paren.nud(), Some(Nud::Group));
    assert_eq!(paren.led(), Some(Led::Call));
    assert_eq!(paren.std(), Some(Std::Empty));
}

#[test]
fn test_infix_right_and_assignment() {
    let mut g = GrammarBuilder::new();
    g.infix_right("^", 70, BinaryOp::Mul);
    g.assignment("+=", 10, Some(BinaryOp::Add));
    let grammar = g.build();
    assert_eq!(
        grammar.get("^").unwrap().led(),
        Some(Led::InfixRight { op: BinaryOp::Mul, bp: 70 })
    );
    assert_eq!(
        grammar.get("+=").unwrap().led(),
        Some(Led::Assign { bp: 10, compound: Some(BinaryOp::Add) })
    );
}

#[test]
fn test_lookup_keys() {
    let grammar = Grammar::quakec();
    assert_eq!(grammar.key_for(&token(TokenKind::Identifier, "health")), NAME);
    assert_eq!(grammar.key_for(&token(TokenKind::Identifier, "if")), "if");
    assert_eq!(grammar.key_for(&token(TokenKind::Identifier, "else")), "else");
    assert_eq!(grammar.key_for(&token(TokenKind::TypeKeyword, "entity")), TYPE);
    assert_eq!(grammar.key_for(&token(TokenKind::Number, "3")), LITERAL);
    assert_eq!(grammar.key_for(&token(TokenKind::String, "s")), LITERAL);
    assert_eq!(grammar.key_for(&token(TokenKind::Vector, "0 0 1")), LITERAL);
    assert_eq!(grammar.key_for(&token(TokenKind::Operator, "+=")), "+=");
    assert_eq!(grammar.key_for(&Token::eof(Span::DUMMY, 1, 1)), END);
}

#[test]
fn test_unregistered_operator_has_no_definition() {
    let grammar = Grammar::quakec();
    assert!(grammar.lookup(&token(TokenKind::Operator, "@")).is_none());
    assert!(grammar.lookup(&token(TokenKind::Operator, "%")).is_none());
    assert!(grammar.lookup(&token(TokenKind::Operator, "[")).is_none());
}

#[test]
fn test_quakec_precedence_table() {
    let grammar = Grammar::quakec();
    let lbp = |id: &str| grammar.get(id).unwrap().lbp();
    assert_eq!(lbp("."), 80);
    assert_eq!(lbp("("), 80);
    assert_eq!(lbp("*"), 60);
    assert_eq!(lbp("/"), 60);
    assert_eq!(lbp("+"), 50);
    assert_eq!(lbp("-"), 50);
    assert_eq!(lbp("&"), 45);
    assert_eq!(lbp("|"), 45);
    for op in ["==", "!=", "<", "<=", ">", ">="] {
        assert_eq!(lbp(op), 40, "{op}");
    }
    assert_eq!(lbp("&&"), 30);
    assert_eq!(lbp("||"), 20);
    for op in ["=", "+=", "-=", "*=", "/="] {
        assert_eq!(lbp(op), 10, "{op}");
    }
    for terminator in [")", ",", ";", "}", "(end)", "else"] {
        assert_eq!(lbp(terminator), 0, "{terminator}");
    }
    assert_eq!(
        grammar.get("!").unwrap().nud(),
        Some(Nud::Prefix { op: UnaryOp::Not, bp: 100 })
    );
}

#[test]
fn test_quakec_statement_behaviors() {
    let grammar = Grammar::quakec();
    let std = |id: &str| grammar.get(id).and_then(SymbolDef::std);
    assert_eq!(std("{"), Some(Std::Block));
    assert_eq!(std(TYPE), Some(Std::Declaration));
    assert_eq!(std("."), Some(Std::Declaration));
    assert_eq!(std("local"), Some(Std::Local));
    assert_eq!(std("if"), Some(Std::If));
    assert_eq!(std("while"), Some(Std::While));
    assert_eq!(std("do"), Some(Std::DoWhile));
    assert_eq!(std("return"), Some(Std::Return));
    assert_eq!(std(";"), Some(Std::Empty));
    assert_eq!(std("else"), None);
}

#[test]
fn test_quakec_grammar_is_shared() {
    assert!(std::ptr::eq(Grammar::quakec(), Grammar::quakec()));
    assert!(!Grammar::quakec().is_empty());
    assert!(Grammar::quakec().ids().any(|id| id == "&&"));
}

#[test]
fn test_grammar_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();
}
