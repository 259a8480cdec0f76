//! Non-fatal problem reports shared by the tokenizer and the parser.
//!
//! Nothing in the front end aborts on malformed input. The component that
//! notices a problem records a [`Diagnostic`] in a [`Diagnostics`] sink and
//! carries on with a best-effort placeholder. Callers decide what a
//! non-empty sink means.

use std::ops::Range;

use crate::token::{Token, TokenKind};

/// Broad class of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Raised while scanning characters into tokens
    Lexical,
    /// Raised while matching tokens against the grammar
    Syntax,
}

/// A single problem found in the input.
///
/// The `Display` output is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A digit run that does not fit the numeric literal type.
    #[error("ERROR: The number '{text}' isn't valid {target}")]
    InvalidNumber {
        text: String,
        target: String,
        position: usize,
    },

    /// A character that starts no token.
    #[error("ERROR: Bad character in input: '{character}'")]
    BadCharacter { character: char, position: usize },

    /// A run of letters that is not a keyword.
    #[error("ERROR: Unrecognized word in input: '{word}'")]
    UnknownWord { word: String, position: usize },

    /// The grammar required `expected` but found `actual`.
    #[error("ERROR: Unexpected token <{actual}>, expected <{expected}>")]
    UnexpectedToken {
        actual: TokenKind,
        expected: TokenKind,
        position: usize,
        width: usize,
    },

    /// Parentheses or prefix operators nested past the parser's limit.
    #[error("ERROR: Expression nested deeper than {limit} levels")]
    NestingTooDeep {
        limit: usize,
        position: usize,
        width: usize,
    },
}

impl Diagnostic {
    /// Returns whether this is a lexical or a syntax problem
    pub fn category(&self) -> DiagnosticCategory {
        match self {
            Diagnostic::InvalidNumber { .. }
            | Diagnostic::BadCharacter { .. }
            | Diagnostic::UnknownWord { .. } => DiagnosticCategory::Lexical,
            Diagnostic::UnexpectedToken { .. } | Diagnostic::NestingTooDeep { .. } => {
                DiagnosticCategory::Syntax
            }
        }
    }

    /// Byte offset where the problem starts
    pub fn position(&self) -> usize {
        match self {
            Diagnostic::InvalidNumber { position, .. }
            | Diagnostic::BadCharacter { position, .. }
            | Diagnostic::UnknownWord { position, .. }
            | Diagnostic::UnexpectedToken { position, .. }
            | Diagnostic::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Byte range the problem covers in the source text.
    ///
    /// An unexpected end of input yields an empty range at the end.
    pub fn span(&self) -> Range<usize> {
        let start = self.position();
        let len = match self {
            Diagnostic::InvalidNumber { text, .. } => text.len(),
            Diagnostic::BadCharacter { character, .. } => character.len_utf8(),
            Diagnostic::UnknownWord { word, .. } => word.len(),
            Diagnostic::UnexpectedToken { width, .. }
            | Diagnostic::NestingTooDeep { width, .. } => *width,
        };
        start..start + len
    }
}

/// Ordered, append-only collection of diagnostics.
///
/// Entries are never deduplicated or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        #[cfg(feature = "logging")]
        log::debug!("diagnostic at {}: {}", diagnostic.position(), diagnostic);
        self.items.push(diagnostic);
    }

    pub fn report_invalid_number(&mut self, position: usize, text: &str, target: &str) {
        self.report(Diagnostic::InvalidNumber {
            text: text.to_string(),
            target: target.to_string(),
            position,
        });
    }

    pub fn report_bad_character(&mut self, position: usize, character: char) {
        self.report(Diagnostic::BadCharacter {
            character,
            position,
        });
    }

    pub fn report_unknown_word(&mut self, position: usize, word: &str) {
        self.report(Diagnostic::UnknownWord {
            word: word.to_string(),
            position,
        });
    }

    /// Records that `found` stood where a token of kind `expected` belonged.
    pub fn report_unexpected_token(&mut self, found: &Token, expected: TokenKind) {
        self.report(Diagnostic::UnexpectedToken {
            actual: found.kind,
            expected,
            position: found.position,
            width: found.text.len(),
        });
    }

    /// Records that `found` opens a level past the nesting `limit`.
    pub fn report_nesting_too_deep(&mut self, found: &Token, limit: usize) {
        self.report(Diagnostic::NestingTooDeep {
            limit,
            position: found.position,
            width: found.text.len(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Rendered messages, in detection order.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(ToString::to_string).collect()
    }

    /// Number of diagnostics in `category`.
    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.items
            .iter()
            .filter(|d| d.category() == category)
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.report(diagnostic);
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
