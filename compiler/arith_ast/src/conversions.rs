use arith_lexer::{TokenKind, TokenValue};

use super::ast::{BinaryOperator, LiteralValue, UnaryOperator};

impl TryFrom<TokenKind> for UnaryOperator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(UnaryOperator::Identity),
            TokenKind::Minus => Ok(UnaryOperator::Negation),
            other => Err(other),
        }
    }
}

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = TokenKind;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(BinaryOperator::Add),
            TokenKind::Minus => Ok(BinaryOperator::Sub),
            TokenKind::Star => Ok(BinaryOperator::Mul),
            TokenKind::Slash => Ok(BinaryOperator::Div),
            other => Err(other),
        }
    }
}

impl From<Option<TokenValue>> for LiteralValue {
    fn from(value: Option<TokenValue>) -> Self {
        match value {
            Some(TokenValue::Number(n)) => LiteralValue::Number(n),
            Some(TokenValue::Boolean(b)) => LiteralValue::Boolean(b),
            None => LiteralValue::Invalid,
        }
    }
}
