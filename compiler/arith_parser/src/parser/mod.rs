//! Parser for arith expressions.
//!
//! The parser pulls every token out of the lexer up front, then walks the
//! buffer once with a cursor. It never backtracks and never gives up: when
//! the grammar needs a token that is not there it records a diagnostic,
//! makes up a placeholder and keeps going. The result is always a complete
//! tree, paired with the diagnostics that say which parts were invented.

mod diagnostics;
mod expressions;
pub mod precedence;
pub mod test_utils;
mod token_stream;

#[cfg(test)]
mod tests;

use arith_ast::ExpressionNode;
use arith_lexer::{Diagnostics, Lexer, Token, TokenKind};
use log::debug;

pub use diagnostics::render_snippet;
pub use token_stream::TokenStream;

/// Maximum allowed nesting depth to prevent stack overflow
pub const MAX_NESTING_DEPTH: usize = 100;

/// The outcome of parsing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    /// The parsed expression
    pub root: ExpressionNode,
    /// The token that ended the input
    pub end_of_file_token: Token,
    /// Lexical and syntax problems, in the order they were found
    pub diagnostics: Diagnostics,
}

impl SyntaxTree {
    /// Tokenizes and parses `source`.
    pub fn parse(source: &str) -> Self {
        Parser::new(source).parse()
    }

    /// Returns true if any diagnostic was reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Tokenizes and parses `source`.
pub fn parse(source: &str) -> SyntaxTree {
    SyntaxTree::parse(source)
}

/// A precedence-climbing parser over a buffered token stream.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: TokenStream,
    diagnostics: Diagnostics,
    /// Number of `parse_expression` calls currently open
    depth: usize,
}

impl Parser {
    /// Runs the lexer over `source` to the end and buffers what it produced.
    ///
    /// Lexer diagnostics come first in the parser's own list.
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let mut diagnostics = Diagnostics::new();
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token(&mut diagnostics);
            let done = token.kind == TokenKind::EndOfFile;
            if !token.is_trivia() {
                tokens.push(token);
            }
            if done {
                break;
            }
        }

        Self::from_tokens(tokens, diagnostics)
    }

    /// Builds a parser over tokens that were scanned elsewhere.
    pub fn from_tokens(tokens: Vec<Token>, diagnostics: Diagnostics) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            diagnostics,
            depth: 0,
        }
    }

    /// The buffered token stream
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Diagnostics collected so far
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Parses one expression followed by the end of the input.
    pub fn parse(mut self) -> SyntaxTree {
        let root = self.parse_expression(0);
        let end_of_file_token = self.match_token(TokenKind::EndOfFile);
        SyntaxTree {
            root,
            end_of_file_token,
            diagnostics: self.diagnostics,
        }
    }

    /// Consumes the current token if it has kind `expected`.
    ///
    /// Otherwise reports the mismatch and returns a missing token of the
    /// expected kind at the current position, leaving the cursor where it
    /// is.
    pub fn match_token(&mut self, expected: TokenKind) -> Token {
        if self.tokens.current().kind == expected {
            return self.tokens.advance();
        }

        let current = self.tokens.current();
        self.diagnostics.report_unexpected_token(current, expected);
        debug!(
            "synthesized missing {expected} at {} in place of {current}",
            current.position
        );
        Token::missing(expected, current.position)
    }
}
