use arith_ast::ExpressionNode;
use arith_lexer::{Diagnostic, DiagnosticCategory};
use arith_parser::SyntaxTree;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub category: &'static str,
    pub message: String,
    pub start: usize,
    pub end: usize,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        let span = diagnostic.span();
        Self {
            category: match diagnostic.category() {
                DiagnosticCategory::Lexical => "lexical",
                DiagnosticCategory::Syntax => "syntax",
            },
            message: diagnostic.to_string(),
            start: span.start,
            end: span.end,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// The tree reprinted with normalized spacing
    pub expression: String,
    /// True if error recovery invented any part of the tree
    pub recovered: bool,
    pub tree: ExpressionNode,
    pub diagnostics: Vec<DiagnosticReport>,
}

impl From<SyntaxTree> for ParseReport {
    fn from(tree: SyntaxTree) -> Self {
        Self {
            expression: tree.root.to_string(),
            recovered: tree.root.is_recovered() || tree.end_of_file_token.is_missing(),
            diagnostics: tree.diagnostics.iter().map(DiagnosticReport::from).collect(),
            tree: tree.root,
        }
    }
}

/// Parse a source string and return a machine-readable report of the tree
/// and every diagnostic, with byte spans.
pub fn analyze_source(source: &str) -> ParseReport {
    ParseReport::from(arith_parser::parse(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_for_clean_input() {
        let report = analyze_source("(1+2)*3");
        assert_eq!(report.expression, "(1 + 2) * 3");
        assert!(!report.recovered);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn report_carries_diagnostic_spans() {
        let report = analyze_source("1 + @");
        assert!(report.recovered);
        let summary: Vec<(&str, usize, usize)> = report
            .diagnostics
            .iter()
            .map(|d| (d.category, d.start, d.end))
            .collect();
        assert_eq!(summary, [("lexical", 4, 5), ("syntax", 5, 5)]);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = analyze_source("-4");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["expression"], "-4");
        assert_eq!(json["tree"]["type"], "Unary");
        assert_eq!(json["diagnostics"].as_array().map(Vec::len), Some(0));
    }
}
