//! Raw scanner built with `logos`.
//!
//! The raw tokens only classify the shape of the next run of characters.
//! [`crate::lexer::Lexer`] turns them into semantic [`crate::Token`]s,
//! parses numbers, looks words up in the keyword table and reports problems.

use logos::Logos;

/// Raw token type used by the logos scanner
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogosToken {
    // --- Literals ---
    /// A run of ASCII digits
    #[regex(r"[0-9]+")]
    Digits,

    // --- Trivia ---
    /// A run of whitespace
    #[regex(r"\s+")]
    Whitespace,

    // --- Operators ---
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    // --- Delimiters ---
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    // --- Words (keywords are resolved afterwards) ---
    /// A run of ASCII letters
    #[regex(r"[a-zA-Z]+")]
    Word,
}
