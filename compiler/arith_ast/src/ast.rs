//! Expression tree definitions for arith.
//!
//! Every node owns its children, so a tree never shares or cycles. Nodes keep
//! the tokens they were built from (operators, parentheses, literal text) so
//! a tree can be re-printed and mapped back onto the source.

use std::fmt;
use std::ops::Range;

use arith_lexer::Token;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::visit::{RecoveryScanner, Visitable};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum ExpressionNode {
    Literal(LiteralExpressionNode),
    Unary(Box<UnaryExpressionNode>),
    Binary(Box<BinaryExpressionNode>),
    Parenthesized(Box<ParenthesizedExpressionNode>),
}

/// Discriminant of an [`ExpressionNode`], for callers that only need the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    LiteralExpression,
    UnaryExpression,
    BinaryExpression,
    ParenthesizedExpression,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::LiteralExpression => "LiteralExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::ParenthesizedExpression => "ParenthesizedExpression",
        };
        f.write_str(name)
    }
}

/// The resolved value of a literal.
///
/// `Invalid` marks a literal whose value could not be determined: either
/// the parser synthesized the token, or the digits did not fit an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralValue {
    Number(i32),
    Boolean(bool),
    Invalid,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Invalid => f.write_str("<invalid>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LiteralExpressionNode {
    pub token: Token,
    pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryExpressionNode {
    pub operator: Token,
    pub operand: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: Token,
    pub right: ExpressionNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParenthesizedExpressionNode {
    pub open_paren: Token,
    pub expression: ExpressionNode,
    pub close_paren: Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Identity,
    Negation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Identity => "+",
            UnaryOperator::Negation => "-",
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
        }
    }
}

impl UnaryExpressionNode {
    /// The operator named by the operator token, if it is a unary operator
    pub fn op(&self) -> Option<UnaryOperator> {
        UnaryOperator::try_from(self.operator.kind).ok()
    }
}

impl BinaryExpressionNode {
    /// The operator named by the operator token, if it is a binary operator
    pub fn op(&self) -> Option<BinaryOperator> {
        BinaryOperator::try_from(self.operator.kind).ok()
    }
}

impl ExpressionNode {
    pub fn literal(token: Token, value: LiteralValue) -> Self {
        ExpressionNode::Literal(LiteralExpressionNode { token, value })
    }

    pub fn unary(operator: Token, operand: ExpressionNode) -> Self {
        ExpressionNode::Unary(Box::new(UnaryExpressionNode { operator, operand }))
    }

    pub fn binary(left: ExpressionNode, operator: Token, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    pub fn parenthesized(
        open_paren: Token,
        expression: ExpressionNode,
        close_paren: Token,
    ) -> Self {
        ExpressionNode::Parenthesized(Box::new(ParenthesizedExpressionNode {
            open_paren,
            expression,
            close_paren,
        }))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ExpressionNode::Literal(_) => NodeKind::LiteralExpression,
            ExpressionNode::Unary(_) => NodeKind::UnaryExpression,
            ExpressionNode::Binary(_) => NodeKind::BinaryExpression,
            ExpressionNode::Parenthesized(_) => NodeKind::ParenthesizedExpression,
        }
    }

    /// Direct child expressions, left to right.
    pub fn children(&self) -> Vec<&ExpressionNode> {
        match self {
            ExpressionNode::Literal(_) => Vec::new(),
            ExpressionNode::Unary(node) => vec![&node.operand],
            ExpressionNode::Binary(node) => vec![&node.left, &node.right],
            ExpressionNode::Parenthesized(node) => vec![&node.expression],
        }
    }

    /// Every token in the subtree, in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            ExpressionNode::Literal(node) => out.push(&node.token),
            ExpressionNode::Unary(node) => {
                out.push(&node.operator);
                node.operand.collect_tokens(out);
            }
            ExpressionNode::Binary(node) => {
                node.left.collect_tokens(out);
                out.push(&node.operator);
                node.right.collect_tokens(out);
            }
            ExpressionNode::Parenthesized(node) => {
                out.push(&node.open_paren);
                node.expression.collect_tokens(out);
                out.push(&node.close_paren);
            }
        }
    }

    pub fn first_token(&self) -> &Token {
        match self {
            ExpressionNode::Literal(node) => &node.token,
            ExpressionNode::Unary(node) => &node.operator,
            ExpressionNode::Binary(node) => node.left.first_token(),
            ExpressionNode::Parenthesized(node) => &node.open_paren,
        }
    }

    pub fn last_token(&self) -> &Token {
        match self {
            ExpressionNode::Literal(node) => &node.token,
            ExpressionNode::Unary(node) => node.operand.last_token(),
            ExpressionNode::Binary(node) => node.right.last_token(),
            ExpressionNode::Parenthesized(node) => &node.close_paren,
        }
    }

    /// Byte range from the first to the last token of the subtree.
    pub fn span(&self) -> Range<usize> {
        let start = self.first_token().position;
        let end = self.last_token().span().end.max(start);
        start..end
    }

    /// Number of nested levels, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(ExpressionNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Returns true if error recovery produced any part of this subtree.
    pub fn is_recovered(&self) -> bool {
        let mut scanner = RecoveryScanner::default();
        // The scanner never fails
        let _ = self.accept(&mut scanner);
        scanner.recovered
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Literal(node) => f.write_str(&node.token.text),
            ExpressionNode::Unary(node) => write!(f, "{}{}", node.operator.text, node.operand),
            ExpressionNode::Binary(node) => {
                write!(f, "{} {} {}", node.left, node.operator.text, node.right)
            }
            ExpressionNode::Parenthesized(node) => write!(
                f,
                "{}{}{}",
                node.open_paren.text, node.expression, node.close_paren.text
            ),
        }
    }
}
