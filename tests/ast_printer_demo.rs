use arith_ast::AstPrinter;
use arith_parser::parse;
use pretty_assertions::assert_eq;

#[test]
fn print_parsed_expression() {
    let tree = parse("2 * (3 + -4)");
    let printed = AstPrinter::new().print(&tree.root);
    println!("{printed}");
    assert_eq!(
        printed,
        "BinaryExpression *\n\
         ├── LiteralExpression 2\n\
         └── ParenthesizedExpression\n\
         \u{20}   └── BinaryExpression +\n\
         \u{20}       ├── LiteralExpression 3\n\
         \u{20}       └── UnaryExpression -\n\
         \u{20}           └── LiteralExpression 4\n"
    );
}

#[test]
fn print_recovered_expression_with_positions() {
    let tree = parse("(1 *");
    let printed = AstPrinter::new().with_positions(true).print(&tree.root);
    assert_eq!(
        printed,
        "ParenthesizedExpression <missing CloseParen> @0\n\
         └── BinaryExpression * @1\n\
         \u{20}   ├── LiteralExpression 1 @1\n\
         \u{20}   └── LiteralExpression <missing Number> @4\n"
    );
}
