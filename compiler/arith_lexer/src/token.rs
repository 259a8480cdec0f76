use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lexical category of a token.
///
/// This is a closed set: every character of the input ends up in exactly one
/// of these kinds, with `Bad` catching anything the grammar does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    // Literals
    Number,

    // Trivia
    Whitespace,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Punctuation
    OpenParen,
    CloseParen,

    // Keywords
    TrueKeyword,
    FalseKeyword,

    // Special
    EndOfFile,
    Bad,
}

impl TokenKind {
    /// Returns true for kinds the parser never sees.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Bad)
    }

    /// Returns true if this kind is one of the keyword kinds
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::TrueKeyword | TokenKind::FalseKeyword)
    }

    /// The fixed source text for kinds that always spell the same way.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::FalseKeyword => Some("false"),
            TokenKind::Number
            | TokenKind::Whitespace
            | TokenKind::EndOfFile
            | TokenKind::Bad => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "Number",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::TrueKeyword => "TrueKeyword",
            TokenKind::FalseKeyword => "FalseKeyword",
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Bad => "Bad",
        };
        f.write_str(name)
    }
}

/// The value a token carries once its text has been interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenValue {
    Number(i32),
    Boolean(bool),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Represents a token in the source text, including its kind, lexeme and
/// byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The lexical category of the token
    pub kind: TokenKind,
    /// The 0-based byte offset of the first character
    pub position: usize,
    /// The exact source text of the token
    pub text: String,
    /// The interpreted value, when the token has one
    pub value: Option<TokenValue>,
    /// Set on tokens made up by the parser to stand in for absent input
    #[cfg_attr(feature = "serde", serde(default))]
    pub missing: bool,
}

impl Token {
    /// Creates a new token scanned from the source text.
    pub fn new<S: Into<String>>(
        kind: TokenKind,
        position: usize,
        text: S,
        value: Option<TokenValue>,
    ) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            value,
            missing: false,
        }
    }

    /// Creates a placeholder token of `kind` at `position`.
    ///
    /// The placeholder has no text and no value. Parser error recovery uses
    /// it in place of a token the grammar required but the input lacked.
    pub fn missing(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            position,
            text: String::new(),
            value: None,
            missing: true,
        }
    }

    /// Creates the end-of-file token for a source of `len` bytes.
    pub fn end_of_file(len: usize) -> Self {
        Self::new(TokenKind::EndOfFile, len, "", None)
    }

    /// Returns true if this token was synthesized by error recovery
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Returns true if the parser discards this token
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Byte range covered by the token in the source text.
    pub fn span(&self) -> Range<usize> {
        self.position..self.position + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing {
            write!(f, "<missing {}>@{}", self.kind, self.position)
        } else {
            write!(f, "{} {:?}@{}", self.kind, self.text, self.position)
        }
    }
}
