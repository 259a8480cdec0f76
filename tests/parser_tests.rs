// End-to-end tests for the arith parser
use arith_ast::{AstPrinter, ExpressionNode, LiteralValue, NodeCounter};
use arith_lexer::TokenKind;
use arith_parser::parser::test_utils::sexpr;
use arith_parser::{parse, SyntaxTree, MAX_NESTING_DEPTH};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tests::well_formed_alphabet;

#[test]
fn test_simple_binary_expression() {
    let tree = parse("1 + 2 * 3");
    assert!(!tree.has_errors());
    assert_eq!(sexpr(&tree.root), "(+ 1 (* 2 3))");
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(sexpr(&parse("1 - 2 - 3").root), "(- (- 1 2) 3)");
}

#[test]
fn test_grouping() {
    assert_eq!(sexpr(&parse("(1 + 2) * 3").root), "(* (group (+ 1 2)) 3)");
}

#[test]
fn test_negation_then_addition() {
    assert_eq!(sexpr(&parse("-1 + 2").root), "(+ (neg 1) 2)");
}

#[test]
fn test_missing_right_operand() {
    let tree = parse("1 + ");
    assert_eq!(
        tree.diagnostics.messages(),
        vec!["ERROR: Unexpected token <EndOfFile>, expected <Number>"]
    );
    assert_eq!(sexpr(&tree.root), "(+ 1 ?)");
}

#[test]
fn test_lone_bad_character() {
    let tree = SyntaxTree::parse("@");
    let messages = tree.diagnostics.messages();
    assert_eq!(
        messages
            .iter()
            .filter(|m| m.starts_with("ERROR: Bad character"))
            .count(),
        1
    );
    assert_eq!(messages.len(), 2);

    match &tree.root {
        ExpressionNode::Literal(lit) => {
            assert_eq!(lit.token.kind, TokenKind::Number);
            assert!(lit.token.is_missing());
            assert_eq!(lit.value, LiteralValue::Invalid);
        }
        other => panic!("expected a placeholder literal, got {other:?}"),
    }
}

#[test]
fn test_deep_nesting() {
    let source = format!("{}1{}", "(".repeat(64), ")".repeat(64));
    let tree = parse(&source);
    assert!(!tree.has_errors());
    assert_eq!(tree.root.depth(), 65);
    assert_eq!(NodeCounter::count(&tree.root).parenthesized, 64);
}

#[test]
fn test_alternating_prefix_and_groups_past_the_limit() {
    let source = format!("{}1", "-(".repeat(50_000));
    let tree = parse(&source);

    let too_deep = tree
        .diagnostics
        .messages()
        .iter()
        .filter(|m| m.starts_with("ERROR: Expression nested deeper than"))
        .count();
    assert_eq!(too_deep, 1);

    // Each level uses one call for the sign and one for the group
    let counts = NodeCounter::count(&tree.root);
    assert_eq!(counts.unary, MAX_NESTING_DEPTH / 2);
    assert_eq!(counts.parenthesized, MAX_NESTING_DEPTH / 2);
    assert_eq!(tree.root.depth(), MAX_NESTING_DEPTH + 1);

    // Everything that walks the tree stays within the same bound
    let printed = AstPrinter::new().print(&tree.root);
    assert_eq!(printed.lines().count(), MAX_NESTING_DEPTH + 1);
    assert!(tree.root.to_string().starts_with("-(-("));
}

#[test]
fn test_long_chain_folds_left() {
    let source = (1..=50).map(|n| n.to_string()).collect::<Vec<_>>().join(" - ");
    let tree = parse(&source);
    assert!(!tree.has_errors());
    // Left-leaning: the right operand of every subtraction is a literal
    let mut node = &tree.root;
    let mut count = 0;
    while let ExpressionNode::Binary(bin) = node {
        assert!(matches!(bin.right, ExpressionNode::Literal(_)));
        node = &bin.left;
        count += 1;
    }
    assert_eq!(count, 49);
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,48}") {
        let tree = parse(&source);
        prop_assert_eq!(tree.end_of_file_token.kind, TokenKind::EndOfFile);
    }

    #[test]
    fn clean_parse_has_no_recovered_nodes(source in well_formed_alphabet()) {
        let tree = parse(&source);
        if !tree.has_errors() {
            prop_assert!(!tree.root.is_recovered());
        }
    }

    #[test]
    fn reprinting_a_clean_tree_is_stable(source in well_formed_alphabet()) {
        let tree = parse(&source);
        if !tree.has_errors() {
            let reprinted = parse(&tree.root.to_string());
            prop_assert!(!reprinted.has_errors());
            prop_assert_eq!(sexpr(&reprinted.root), sexpr(&tree.root));
        }
    }
}
