//! arith lexical analyzer module
//!
//! This module provides lexical analysis for arith expressions, converting
//! source text into a stream of tokens for the parser. Lexical problems are
//! recorded as diagnostics instead of being raised.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[allow(missing_docs)]
pub mod diagnostics;
pub mod keywords;
pub mod lexer;
pub mod logos_token;
#[allow(missing_docs)]
pub mod token;

// Re-export the main types for convenience
pub use diagnostics::{Diagnostic, DiagnosticCategory, Diagnostics};
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Token, TokenKind, TokenValue};
