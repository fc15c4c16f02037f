//! Property-based tests for the parser.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use qc_parse::{parse, parse_expression, parse_with, Grammar, ParseErrorKind, ParserConfig};

fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_filter("not a keyword", |s| {
        !qc_ir::TYPE_KEYWORDS.contains(&s.as_str())
            && !["if", "else", "while", "do", "return", "local"].contains(&s.as_str())
    })
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("=="),
        Just("<"),
        Just("&&"),
        Just("||"),
        Just("&"),
    ]
}

/// Well-formed expressions built from names, numbers and binary operators.
fn arb_expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![arb_ident(), (0u32..1000).prop_map(|n| n.to_string())];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (arb_ident(), inner).prop_map(|(f, e)| format!("{f}({e})")),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Arbitrary input never panics.
    #[test]
    fn parser_never_panics(input in ".{0,200}") {
        let _ = parse(&input);
    }

    /// Parsing the same source twice yields equal results.
    #[test]
    fn parser_is_deterministic(input in ".{0,120}") {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    /// Generated expressions always parse.
    #[test]
    fn generated_expressions_parse(expr in arb_expr()) {
        prop_assert!(parse_expression(&expr).is_ok(), "{}", expr);
    }

    /// Assigning a generated expression is a valid statement.
    #[test]
    fn assignments_are_statements(name in arb_ident(), expr in arb_expr()) {
        let source = format!("{name} = {expr};");
        let module = parse(&source).unwrap();
        prop_assert_eq!(module.len(), 1);
        let prefix = format!("(= {name} ");
        prop_assert!(module.to_string().starts_with(&prefix));
    }

    /// Redundant parentheses do not change the tree.
    #[test]
    fn redundant_parentheses_do_not_change_the_tree(expr in arb_expr()) {
        let plain = parse_expression(&expr).unwrap();
        let wrapped = parse_expression(&format!("(({expr}))")).unwrap();
        prop_assert_eq!(plain.to_string(), wrapped.to_string());
    }

    /// Nesting past the configured limit is rejected, never overflowing.
    #[test]
    fn depth_limit_is_enforced(depth in 1usize..64, limit in 2u32..32) {
        let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        let config = ParserConfig::new().with_max_depth(limit);
        match parse_with(&source, Grammar::quakec(), config) {
            // statement, assignment target and value each take one level
            Ok(_) => prop_assert!(depth + 3 <= limit as usize),
            Err(err) => {
                prop_assert!(depth + 3 > limit as usize);
                prop_assert_eq!(err.kind, ParseErrorKind::TooDeep { limit });
            }
        }
    }
}
