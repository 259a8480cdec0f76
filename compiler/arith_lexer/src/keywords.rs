//! Fixed keyword table consulted for every run of letters.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::token::{TokenKind, TokenValue};

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = HashMap::from([
        ("true", TokenKind::TrueKeyword),
        ("false", TokenKind::FalseKeyword),
    ]);
}

/// Looks `word` up in the keyword table.
///
/// Matching is exact and case-sensitive: `True` is not a keyword.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    KEYWORDS.get(word).copied()
}

/// The value a keyword token carries.
pub fn keyword_value(kind: TokenKind) -> Option<TokenValue> {
    match kind {
        TokenKind::TrueKeyword => Some(TokenValue::Boolean(true)),
        TokenKind::FalseKeyword => Some(TokenValue::Boolean(false)),
        _ => None,
    }
}
