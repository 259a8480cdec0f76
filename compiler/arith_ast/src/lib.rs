//! Expression tree for arith arithmetic expressions.
//!
//! This crate defines the nodes the parser builds, along with utilities for
//! traversing, printing and serializing a tree.

pub mod ast;
pub mod conversions;
pub mod visit;

// Re-export commonly used types
pub use ast::{
    BinaryExpressionNode, BinaryOperator, ExpressionNode, LiteralExpressionNode, LiteralValue,
    NodeKind, ParenthesizedExpressionNode, UnaryExpressionNode, UnaryOperator,
};
pub use visit::{NodeCounter, VisitError, VisitResult, Visitable, Visitor};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Write as _;

/// A result type for tree operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a tree node to a JSON string.
///
/// # Example
///
/// ```
/// use arith_ast::{to_json, ExpressionNode, LiteralValue};
/// use arith_lexer::{Token, TokenKind, TokenValue};
///
/// let token = Token::new(TokenKind::Number, 0, "42", Some(TokenValue::Number(42)));
/// let expr = ExpressionNode::literal(token, LiteralValue::Number(42));
/// let json = to_json(&expr).unwrap();
///
/// assert!(json.contains(r#""type": "Literal""#));
/// assert!(json.contains(r#""Number": 42"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree node from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// A utility for pretty-printing expression trees.
///
/// Each node takes one line; children hang off their parent with `├──` and
/// `└──` guides:
///
/// ```text
/// BinaryExpression +
/// ├── LiteralExpression 1
/// └── BinaryExpression *
///     ├── LiteralExpression 2
///     └── LiteralExpression 3
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter {
    positions: bool,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the byte position of each node's first token to its line.
    pub fn with_positions(mut self, positions: bool) -> Self {
        self.positions = positions;
        self
    }

    /// Prints a tree to a string, one line per node.
    pub fn print(&self, root: &ExpressionNode) -> String {
        let mut out = String::new();
        self.print_node(root, "", None, &mut out);
        out
    }

    fn print_node(
        &self,
        node: &ExpressionNode,
        prefix: &str,
        last: Option<bool>,
        out: &mut String,
    ) {
        let (guide, child_prefix) = match last {
            None => ("", String::new()),
            Some(true) => ("└── ", format!("{prefix}    ")),
            Some(false) => ("├── ", format!("{prefix}│   ")),
        };

        let _ = write!(out, "{prefix}{guide}{}", self.label(node));
        if self.positions {
            let _ = write!(out, " @{}", node.first_token().position);
        }
        out.push('\n');

        let children = node.children();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.print_node(child, &child_prefix, Some(i + 1 == count), out);
        }
    }

    fn label(&self, node: &ExpressionNode) -> String {
        let kind = node.kind();
        match node {
            ExpressionNode::Literal(lit) => {
                if lit.token.is_missing() {
                    format!("{kind} {}", missing(&lit.token))
                } else if lit.value == LiteralValue::Invalid {
                    format!("{kind} {} (invalid)", lit.token.text)
                } else {
                    format!("{kind} {}", lit.value)
                }
            }
            ExpressionNode::Unary(un) if un.operator.is_missing() => {
                format!("{kind} {}", missing(&un.operator))
            }
            ExpressionNode::Unary(un) => format!("{kind} {}", un.operator.text),
            ExpressionNode::Binary(bin) if bin.operator.is_missing() => {
                format!("{kind} {}", missing(&bin.operator))
            }
            ExpressionNode::Binary(bin) => format!("{kind} {}", bin.operator.text),
            ExpressionNode::Parenthesized(paren) => {
                let mut label = kind.to_string();
                for token in [&paren.open_paren, &paren.close_paren] {
                    if token.is_missing() {
                        label.push(' ');
                        label.push_str(&missing(token));
                    }
                }
                label
            }
        }
    }
}

fn missing(token: &arith_lexer::Token) -> String {
    format!("<missing {}>", token.kind)
}
