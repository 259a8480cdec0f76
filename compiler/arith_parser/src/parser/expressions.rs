//! Expression parsing using precedence climbing.

use arith_ast::{ExpressionNode, LiteralValue};
use arith_lexer::{Token, TokenKind};
use log::{debug, trace};

use super::precedence::{binary_operator_precedence, unary_operator_precedence};
use super::{Parser, MAX_NESTING_DEPTH};

impl Parser {
    /// Parses an expression whose operators all bind tighter than `parent`.
    ///
    /// A prefix operator is taken when it binds at least as tightly as
    /// `parent`, so `--1` nests. Infix operators must bind strictly tighter,
    /// which folds runs of equal precedence to the left: `1 - 2 - 3` is
    /// `(1 - 2) - 3`.
    ///
    /// At most [`MAX_NESTING_DEPTH`] calls are open at once. A call past
    /// the limit gives up on the nested part instead of recursing.
    pub(crate) fn parse_expression(&mut self, parent: u8) -> ExpressionNode {
        if self.depth >= MAX_NESTING_DEPTH {
            return self.skip_nested_expression();
        }

        self.depth += 1;
        let expression = self.parse_operators(parent);
        self.depth -= 1;
        expression
    }

    fn parse_operators(&mut self, parent: u8) -> ExpressionNode {
        trace!(
            "parse_expression(parent = {parent}) at {}",
            self.tokens.current()
        );

        let unary = unary_operator_precedence(self.tokens.current().kind);
        let mut left = if unary != 0 && unary >= parent {
            let operator = self.tokens.advance();
            let operand = self.parse_expression(unary);
            ExpressionNode::unary(operator, operand)
        } else {
            self.parse_primary()
        };

        loop {
            let precedence = binary_operator_precedence(self.tokens.current().kind);
            if precedence == 0 || precedence <= parent {
                break;
            }

            let operator = self.tokens.advance();
            let right = self.parse_expression(precedence);
            left = ExpressionNode::binary(left, operator, right);
        }

        left
    }

    /// Reports the nesting limit and skips what is left of the current group.
    ///
    /// Skipping stops before a close paren that belongs to a group opened
    /// within the limit, or at the end of the input. Groups opened while
    /// skipping are skipped along with their close parens. The skipped
    /// part is replaced by a placeholder literal.
    fn skip_nested_expression(&mut self) -> ExpressionNode {
        let position = self.tokens.current().position;
        self.diagnostics
            .report_nesting_too_deep(self.tokens.current(), MAX_NESTING_DEPTH);

        let mut open = 0usize;
        let mut skipped = 0usize;
        while !self.tokens.is_at_end() {
            match self.tokens.current().kind {
                TokenKind::OpenParen => open += 1,
                TokenKind::CloseParen if open == 0 => break,
                TokenKind::CloseParen => open -= 1,
                _ => {}
            }
            self.tokens.advance();
            skipped += 1;
        }
        debug!("nesting limit reached at {position}, skipped {skipped} token(s)");

        let placeholder = Token::missing(TokenKind::Number, position);
        ExpressionNode::literal(placeholder, LiteralValue::Invalid)
    }

    /// Parses a literal or a parenthesized expression.
    fn parse_primary(&mut self) -> ExpressionNode {
        match self.tokens.current().kind {
            TokenKind::OpenParen => {
                let open_paren = self.tokens.advance();
                let expression = self.parse_expression(0);
                let close_paren = self.match_token(TokenKind::CloseParen);
                ExpressionNode::parenthesized(open_paren, expression, close_paren)
            }
            TokenKind::TrueKeyword | TokenKind::FalseKeyword => {
                let keyword = self.tokens.advance();
                let value = LiteralValue::Boolean(keyword.kind == TokenKind::TrueKeyword);
                ExpressionNode::literal(keyword, value)
            }
            _ => {
                let number = self.match_token(TokenKind::Number);
                let value = LiteralValue::from(number.value);
                ExpressionNode::literal(number, value)
            }
        }
    }
}
