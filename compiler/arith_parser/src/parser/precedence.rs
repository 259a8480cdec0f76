//! Operator binding strengths.
//!
//! Zero means the kind is not an operator in that position. Higher numbers
//! bind tighter; prefix operators bind tighter than any infix operator.

use arith_lexer::TokenKind;

/// Precedence of `kind` used as a prefix operator.
pub fn unary_operator_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Plus | TokenKind::Minus => 3,
        _ => 0,
    }
}

/// Precedence of `kind` used as an infix operator.
pub fn binary_operator_precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Star | TokenKind::Slash => 2,
        TokenKind::Plus | TokenKind::Minus => 1,
        _ => 0,
    }
}
