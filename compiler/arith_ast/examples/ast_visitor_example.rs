//! Example of using the visitor pattern to traverse and process a tree.

use std::collections::BTreeSet;

use arith_ast::ast::*;
use arith_ast::visit::*;
use arith_ast::AstPrinter;
use arith_lexer::{Token, TokenKind, TokenValue};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the tree for `2 * (3 + 4) - -5`
    let ast = create_sample_ast();

    let counts = NodeCounter::count(&ast);
    println!("Tree node counts:");
    println!("  Literals: {}", counts.literals);
    println!("  Unary: {}", counts.unary);
    println!("  Binary: {}", counts.binary);
    println!("  Parenthesized: {}", counts.parenthesized);

    let mut collector = OperatorCollector::default();
    ast.accept(&mut collector)?;

    println!("\nOperators used:");
    for op in &collector.operators {
        println!("  {op}");
    }

    println!("\nReprinted: {ast}");
    println!("\nPretty-printed tree:");
    print!("{}", AstPrinter::new().print(&ast));

    Ok(())
}

/// Collects the distinct binary operator symbols in a tree.
#[derive(Default)]
pub struct OperatorCollector {
    pub operators: BTreeSet<&'static str>,
}

impl Visitor for OperatorCollector {
    type Output = ();

    fn visit_binary(&mut self, node: &BinaryExpressionNode) -> VisitResult<Self::Output> {
        if let Some(op) = node.op() {
            self.operators.insert(op.symbol());
        }
        self.visit_children(node)
    }
}

fn number(position: usize, n: i32) -> ExpressionNode {
    let token = Token::new(
        TokenKind::Number,
        position,
        n.to_string(),
        Some(TokenValue::Number(n)),
    );
    ExpressionNode::literal(token, LiteralValue::Number(n))
}

fn token(kind: TokenKind, position: usize) -> Token {
    Token::new(kind, position, kind.fixed_text().unwrap_or_default(), None)
}

fn create_sample_ast() -> ExpressionNode {
    let sum = ExpressionNode::binary(number(5, 3), token(TokenKind::Plus, 7), number(9, 4));
    let group = ExpressionNode::parenthesized(
        token(TokenKind::OpenParen, 4),
        sum,
        token(TokenKind::CloseParen, 10),
    );
    let product = ExpressionNode::binary(number(0, 2), token(TokenKind::Star, 2), group);
    let negated = ExpressionNode::unary(token(TokenKind::Minus, 14), number(15, 5));
    ExpressionNode::binary(product, token(TokenKind::Minus, 12), negated)
}
