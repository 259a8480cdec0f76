use arith_lexer::{Token, TokenKind};

/// A buffered stream of tokens from the lexer.
///
/// The buffer never holds trivia and always ends with exactly one
/// end-of-file token, so there is always a current token.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// The tokens being parsed
    tokens: Vec<Token>,
    /// Current position in the token stream
    position: usize,
}

impl TokenStream {
    /// Create a new token stream from lexer output.
    ///
    /// Whitespace and bad tokens are dropped, anything after the first
    /// end-of-file token is ignored, and an end-of-file token is appended
    /// when the input has none.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut buffer: Vec<Token> = Vec::with_capacity(tokens.len() + 1);
        for token in tokens {
            if token.is_trivia() {
                continue;
            }
            let done = token.kind == TokenKind::EndOfFile;
            buffer.push(token);
            if done {
                break;
            }
        }

        if buffer.last().map(|t| t.kind) != Some(TokenKind::EndOfFile) {
            let end = buffer.last().map_or(0, |t| t.span().end);
            buffer.push(Token::end_of_file(end));
        }

        TokenStream {
            tokens: buffer,
            position: 0,
        }
    }

    /// Look `offset` tokens ahead without consuming anything.
    ///
    /// Positions past the end clamp to the final end-of-file token.
    pub fn peek(&self, offset: usize) -> &Token {
        let index = self.position.saturating_add(offset);
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    /// The token at the cursor
    pub fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Return the current token and move the cursor past it
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        self.position += 1;
        token
    }

    /// Cursor position, counted in buffered tokens
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if the cursor has reached the end-of-file token
    pub fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfFile
    }

    /// The buffered tokens, end-of-file included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
