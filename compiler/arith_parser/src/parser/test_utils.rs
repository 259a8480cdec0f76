//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use arith_ast::ExpressionNode;
use arith_lexer::{Lexer, Token, TokenKind, TokenValue};

/// Tokenizes `source`, keeping only the tokens the parser sees
pub fn tokenize(source: &str) -> Vec<Token> {
    let (tokens, _) = Lexer::tokenize(source);
    tokens.into_iter().filter(|t| !t.is_trivia()).collect()
}

/// Creates a number token with its value
pub fn number_token(position: usize, value: i32) -> Token {
    Token::new(
        TokenKind::Number,
        position,
        value.to_string(),
        Some(TokenValue::Number(value)),
    )
}

/// Creates a fixed-text token (operator, parenthesis or keyword)
pub fn token(kind: TokenKind, position: usize) -> Token {
    let text = kind.fixed_text().unwrap_or_default();
    let value = match kind {
        TokenKind::TrueKeyword => Some(TokenValue::Boolean(true)),
        TokenKind::FalseKeyword => Some(TokenValue::Boolean(false)),
        _ => None,
    };
    Token::new(kind, position, text, value)
}

/// Renders a tree in a compact prefix form, e.g. `(+ 1 (* 2 3))`.
///
/// Unary nodes print as `(neg x)` / `(pos x)`, parentheses as `(group x)`,
/// and placeholders for absent input as `?`.
pub fn sexpr(node: &ExpressionNode) -> String {
    match node {
        ExpressionNode::Literal(lit) if lit.token.is_missing() => "?".to_string(),
        ExpressionNode::Literal(lit) => lit.token.text.clone(),
        ExpressionNode::Unary(un) => {
            let name = match un.operator.kind {
                TokenKind::Minus => "neg",
                _ => "pos",
            };
            format!("({name} {})", sexpr(&un.operand))
        }
        ExpressionNode::Binary(bin) => format!(
            "({} {} {})",
            bin.operator.text,
            sexpr(&bin.left),
            sexpr(&bin.right)
        ),
        ExpressionNode::Parenthesized(paren) => format!("(group {})", sexpr(&paren.expression)),
    }
}
