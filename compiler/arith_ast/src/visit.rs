//! Visitor pattern implementation for traversing the expression tree.
//!
//! This module provides a visitor pattern implementation for traversing the
//! tree. It includes a base `Visitor` trait that can be implemented to perform
//! different operations on the nodes, and a `Visitable` trait that nodes
//! implement to accept visitors.

use std::ops::Range;

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// An error that occurred at a specific location in the source.
    #[error("{message} at {location:?}")]
    Located {
        /// The error message.
        message: String,
        /// The source byte range where the error occurred.
        location: Option<Range<usize>>,
    },
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }

    /// Creates a new located error.
    pub fn located<T: Into<String>>(msg: T, location: Option<Range<usize>>) -> Self {
        VisitError::Located {
            message: msg.into(),
            location,
        }
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    ///
    /// The default implementation does nothing.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor for traversing the tree.
///
/// Implement this trait to perform operations on the nodes. The default
/// implementations walk into the children and return the last child's
/// output.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_literal(&mut self, node: &LiteralExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_unary(&mut self, node: &UnaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_parenthesized(
        &mut self,
        node: &ParenthesizedExpressionNode,
    ) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    // Helper to visit children of a node
    fn visit_children<T: Visitable + ?Sized>(&mut self, node: &T) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for ExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            ExpressionNode::Literal(node) => visitor.visit_literal(node),
            ExpressionNode::Unary(node) => visitor.visit_unary(node),
            ExpressionNode::Binary(node) => visitor.visit_binary(node),
            ExpressionNode::Parenthesized(node) => visitor.visit_parenthesized(node),
        }
    }
}

impl Visitable for LiteralExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_literal(self)
    }
}

impl Visitable for UnaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_unary(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.operand.accept(visitor)
    }
}

impl Visitable for BinaryExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_binary(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for ParenthesizedExpressionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_parenthesized(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.expression.accept(visitor)
    }
}

/// Flags any synthesized token or invalid literal value in a subtree.
#[derive(Debug, Default)]
pub struct RecoveryScanner {
    /// Set once a recovered part has been seen.
    pub recovered: bool,
}

impl Visitor for RecoveryScanner {
    type Output = ();

    fn visit_literal(&mut self, node: &LiteralExpressionNode) -> VisitResult {
        if node.token.is_missing() || node.value == LiteralValue::Invalid {
            self.recovered = true;
        }
        Ok(())
    }

    fn visit_unary(&mut self, node: &UnaryExpressionNode) -> VisitResult {
        self.recovered |= node.operator.is_missing();
        self.visit_children(node)
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> VisitResult {
        self.recovered |= node.operator.is_missing();
        self.visit_children(node)
    }

    fn visit_parenthesized(&mut self, node: &ParenthesizedExpressionNode) -> VisitResult {
        self.recovered |= node.open_paren.is_missing() || node.close_paren.is_missing();
        self.visit_children(node)
    }
}

/// Counts the nodes of each kind in a tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    /// Literal nodes seen
    pub literals: usize,
    /// Unary nodes seen
    pub unary: usize,
    /// Binary nodes seen
    pub binary: usize,
    /// Parenthesized nodes seen
    pub parenthesized: usize,
}

impl NodeCounter {
    /// Counts the nodes of `root`.
    pub fn count(root: &ExpressionNode) -> Self {
        let mut counter = Self::default();
        // Counting never fails
        let _ = root.accept(&mut counter);
        counter
    }

    /// Total number of nodes.
    pub fn total(&self) -> usize {
        self.literals + self.unary + self.binary + self.parenthesized
    }
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_literal(&mut self, _node: &LiteralExpressionNode) -> VisitResult {
        self.literals += 1;
        Ok(())
    }

    fn visit_unary(&mut self, node: &UnaryExpressionNode) -> VisitResult {
        self.unary += 1;
        self.visit_children(node)
    }

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> VisitResult {
        self.binary += 1;
        self.visit_children(node)
    }

    fn visit_parenthesized(&mut self, node: &ParenthesizedExpressionNode) -> VisitResult {
        self.parenthesized += 1;
        self.visit_children(node)
    }
}
