
use super::*;

/// Scans `input` and returns the kinds of every token, end of file included.
fn kinds(input: &str) -> Vec<TokenKind> {
    let (tokens, _) = Lexer::tokenize(input);
    tokens.iter().map(|t| t.kind).collect()
}
