//! Tokenizer for arith expressions
//! Converts source text into a stream of tokens for the parser

use logos::Logos;

use crate::diagnostics::Diagnostics;
use crate::keywords::{keyword_kind, keyword_value};
use crate::token::{Token, TokenKind, TokenValue};
use crate::LogosToken;

/// Name of the numeric literal type, as it appears in diagnostics.
const NUMBER_TYPE_NAME: &str = "i32";

/// The tokenizer state: the source text and the current byte offset.
///
/// Each call to [`Lexer::next_token`] scans one token starting at the
/// current offset. Once the input is exhausted every further call returns
/// the same end-of-file token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The source text being scanned
    source: &'a str,
    /// The current byte offset in the source
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current byte offset of the scan
    pub fn position(&self) -> usize {
        self.position
    }

    /// Scans every token up to and including the first end-of-file token.
    ///
    /// Whitespace and bad tokens are kept; the parser is the one that
    /// drops them.
    pub fn tokenize(source: &'a str) -> (Vec<Token>, Diagnostics) {
        let mut lexer = Self::new(source);
        let mut diagnostics = Diagnostics::new();
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token(&mut diagnostics);
            let done = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if done {
                return (tokens, diagnostics);
            }
        }
    }

    /// Get the next token from the source text.
    ///
    /// Problems are appended to `diagnostics`; a token is always returned.
    pub fn next_token(&mut self, diagnostics: &mut Diagnostics) -> Token {
        let start = self.position;
        let rest = &self.source[start..];

        let mut raw = LogosToken::lexer(rest);
        let token = match raw.next() {
            None => return Token::end_of_file(self.source.len()),
            Some(Ok(logos_token)) => {
                let span = raw.span();
                self.position = start + span.end;
                self.convert_token(logos_token, &rest[span], start, diagnostics)
            }
            Some(Err(())) => match rest.chars().next() {
                Some(character) => {
                    self.position = start + character.len_utf8();
                    diagnostics.report_bad_character(start, character);
                    Token::new(TokenKind::Bad, start, character.to_string(), None)
                }
                None => return Token::end_of_file(self.source.len()),
            },
        };

        #[cfg(feature = "logging")]
        log::trace!("scanned {token}");

        token
    }

    /// Convert a LogosToken to our semantic Token
    fn convert_token(
        &self,
        logos_token: LogosToken,
        lexeme: &str,
        start: usize,
        diagnostics: &mut Diagnostics,
    ) -> Token {
        let (kind, value) = match logos_token {
            LogosToken::Digits => {
                let value = match lexeme.parse::<i32>() {
                    Ok(n) => Some(TokenValue::Number(n)),
                    Err(_) => {
                        diagnostics.report_invalid_number(start, lexeme, NUMBER_TYPE_NAME);
                        None
                    }
                };
                (TokenKind::Number, value)
            }
            LogosToken::Whitespace => (TokenKind::Whitespace, None),

            // Operators
            LogosToken::Plus => (TokenKind::Plus, None),
            LogosToken::Minus => (TokenKind::Minus, None),
            LogosToken::Star => (TokenKind::Star, None),
            LogosToken::Slash => (TokenKind::Slash, None),

            // Delimiters
            LogosToken::LParen => (TokenKind::OpenParen, None),
            LogosToken::RParen => (TokenKind::CloseParen, None),

            LogosToken::Word => match keyword_kind(lexeme) {
                Some(kind) => (kind, keyword_value(kind)),
                None => {
                    diagnostics.report_unknown_word(start, lexeme);
                    (TokenKind::Bad, None)
                }
            },
        };

        Token::new(kind, start, lexeme, value)
    }
}

// Include the test module
#[cfg(test)]
mod tests;
