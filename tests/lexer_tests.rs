// End-to-end tests for the arith tokenizer
use arith_lexer::{DiagnosticCategory, Lexer, Token, TokenKind, TokenValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tests::well_formed_alphabet;

#[test]
fn test_token_stream_for_expression() {
    let (tokens, diagnostics) = Lexer::tokenize("12 * (3-true)");
    assert!(diagnostics.is_empty());

    let summary: Vec<(TokenKind, usize, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.position, t.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Number, 0, "12"),
            (TokenKind::Whitespace, 2, " "),
            (TokenKind::Star, 3, "*"),
            (TokenKind::Whitespace, 4, " "),
            (TokenKind::OpenParen, 5, "("),
            (TokenKind::Number, 6, "3"),
            (TokenKind::Minus, 7, "-"),
            (TokenKind::TrueKeyword, 8, "true"),
            (TokenKind::CloseParen, 12, ")"),
            (TokenKind::EndOfFile, 13, ""),
        ]
    );
    assert_eq!(tokens[0].value, Some(TokenValue::Number(12)));
    assert_eq!(tokens[7].value, Some(TokenValue::Boolean(true)));
}

#[test]
fn test_end_of_stream_is_idempotent() {
    let mut lexer = Lexer::new("7");
    let mut diagnostics = arith_lexer::Diagnostics::new();
    assert_eq!(lexer.next_token(&mut diagnostics).kind, TokenKind::Number);

    let first = lexer.next_token(&mut diagnostics);
    for _ in 0..5 {
        assert_eq!(lexer.next_token(&mut diagnostics), first);
    }
    assert_eq!(first, Token::end_of_file(1));
    assert_eq!(lexer.position(), 1);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_lexical_errors_in_detection_order() {
    let (tokens, diagnostics) = Lexer::tokenize("1 # foo 99999999999 ~");
    assert_eq!(
        diagnostics.messages(),
        vec![
            "ERROR: Bad character in input: '#'",
            "ERROR: Unrecognized word in input: 'foo'",
            "ERROR: The number '99999999999' isn't valid i32",
            "ERROR: Bad character in input: '~'",
        ]
    );
    assert_eq!(diagnostics.count(DiagnosticCategory::Lexical), 4);

    let bad: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Bad)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(bad, vec!["#", "foo", "~"]);
}

#[test]
fn test_tokenize_matches_step_by_step_scan() {
    let source = "(1+ 2)*x";
    let (tokens, diagnostics) = Lexer::tokenize(source);

    let mut lexer = Lexer::new(source);
    let mut stepped = arith_lexer::Diagnostics::new();
    for expected in &tokens {
        let token = lexer.next_token(&mut stepped);
        assert_eq!(&token, expected);
        assert_eq!(lexer.position(), token.span().end);
    }
    assert_eq!(stepped, diagnostics);
    assert_eq!(diagnostics.messages(), ["ERROR: Unrecognized word in input: 'x'"]);
}

proptest! {
    #[test]
    fn reconstitution(source in well_formed_alphabet()) {
        let (tokens, diagnostics) = Lexer::tokenize(&source);
        let kept: String = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| t.text.as_str())
            .collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(diagnostics.count(DiagnosticCategory::Syntax), 0);
    }

    #[test]
    fn scanning_arbitrary_text_terminates(source in "\\PC{0,64}") {
        let (tokens, _) = Lexer::tokenize(&source);
        let last = tokens.last().map(|t| t.kind);
        prop_assert_eq!(last, Some(TokenKind::EndOfFile));
        prop_assert!(tokens.len() <= source.chars().count() + 1);
    }
}
