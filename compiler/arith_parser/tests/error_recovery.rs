use arith_lexer::{DiagnosticCategory, TokenKind};
use arith_parser::{parse, Parser, MAX_NESTING_DEPTH};
use proptest::prelude::*;

#[test]
fn test_recovery_keeps_whole_tree() {
    let tree = parse("(1 + ) * 3");
    assert_eq!(
        tree.diagnostics.messages(),
        ["ERROR: Unexpected token <CloseParen>, expected <Number>"]
    );
    // The close paren was not consumed by recovery, so the group still closes
    assert_eq!(tree.root.to_string(), "(1 + ) * 3");
    assert!(tree.root.is_recovered());
    assert!(!tree.end_of_file_token.is_missing());
}

#[test]
fn test_empty_input() {
    let tree = parse("");
    assert_eq!(
        tree.diagnostics.messages(),
        ["ERROR: Unexpected token <EndOfFile>, expected <Number>"]
    );
    assert_eq!(tree.end_of_file_token.position, 0);
}

#[test]
fn test_every_operator_missing_its_operand() {
    for op in ["+", "-", "*", "/"] {
        let source = format!("7 {op}");
        let tree = parse(&source);
        assert_eq!(
            tree.diagnostics.messages(),
            ["ERROR: Unexpected token <EndOfFile>, expected <Number>"],
            "for {source:?}"
        );
    }
}

#[test]
fn test_parser_is_reusable_from_scanned_tokens() {
    let (tokens, diagnostics) = arith_lexer::Lexer::tokenize("4 / $ 2");
    let tree = Parser::from_tokens(tokens, diagnostics).parse();
    assert_eq!(
        tree.diagnostics.messages(),
        ["ERROR: Bad character in input: '$'"]
    );
    assert_eq!(tree.root.to_string(), "4 / 2");
    assert_eq!(tree.end_of_file_token.kind, TokenKind::EndOfFile);
}

const TOO_DEEP: &str = "ERROR: Expression nested deeper than 100 levels";

#[test]
fn test_long_run_of_open_parens_returns() {
    let source = format!("{}1", "(".repeat(100_000));
    let tree = parse(&source);

    let messages = tree.diagnostics.messages();
    assert_eq!(messages[0], TOO_DEEP);
    // Every group opened within the limit is still missing its close paren
    assert_eq!(messages.len(), MAX_NESTING_DEPTH + 1);
    assert!(messages[1..]
        .iter()
        .all(|m| m == "ERROR: Unexpected token <EndOfFile>, expected <CloseParen>"));
    assert_eq!(
        tree.diagnostics.count(DiagnosticCategory::Syntax),
        MAX_NESTING_DEPTH + 1
    );

    assert_eq!(tree.root.depth(), MAX_NESTING_DEPTH + 1);
    assert!(tree.root.is_recovered());
    assert!(!tree.end_of_file_token.is_missing());
}

#[test]
fn test_long_run_of_minus_signs_returns() {
    let source = format!("{}1", "-".repeat(100_000));
    let tree = parse(&source);

    assert_eq!(tree.diagnostics.messages(), [TOO_DEEP]);
    assert_eq!(tree.root.depth(), MAX_NESTING_DEPTH + 1);
    assert!(tree.root.is_recovered());
    assert_eq!(tree.end_of_file_token.position, source.len());
}

proptest! {
    #[test]
    fn parsing_never_panics(source in "\\PC{0,40}") {
        let tree = parse(&source);
        prop_assert_eq!(tree.end_of_file_token.kind, TokenKind::EndOfFile);
    }

    #[test]
    fn clean_parses_have_no_recovered_nodes(source in "[0-9 +*/()-]{0,30}") {
        let tree = parse(&source);
        if tree.diagnostics.is_empty() {
            prop_assert!(!tree.root.is_recovered());
            prop_assert!(!tree.end_of_file_token.is_missing());
        } else {
            // Something was recovered, either a placeholder or an overflow
            prop_assert!(tree.root.is_recovered() || tree.end_of_file_token.is_missing());
        }
    }

    #[test]
    fn tree_tokens_follow_source_order(source in "[0-9 +*/()-]{0,30}") {
        let tree = parse(&source);
        let tokens = tree.root.tokens();
        for pair in tokens.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if !a.is_missing() && !b.is_missing() {
                prop_assert!(a.position < b.position);
            }
        }
    }
}
