use arith_lexer::Diagnostic;

/// Renders a diagnostic with the source line it points into.
///
/// ```text
/// ERROR: Bad character in input: '@'
///   |
/// 1 | 1 + @
///   |     ^
/// ```
///
/// Columns are counted in characters. A diagnostic at the very end of the
/// input gets a single caret just past the last character.
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let span = diagnostic.span();
    let start = floor_char_boundary(source, span.start);

    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    let line_number = source[..line_start].matches('\n').count() + 1;
    let line = source[line_start..line_end].trim_end_matches('\r');

    let column = source[line_start..start].chars().count();
    let end = floor_char_boundary(source, span.end.min(line_end)).max(start);
    let width = source[start..end].chars().count().max(1);

    let gutter = " ".repeat(line_number.to_string().len());
    format!(
        "{diagnostic}\n{gutter} |\n{line_number} | {line}\n{gutter} | {}{}",
        " ".repeat(column),
        "^".repeat(width)
    )
}

fn floor_char_boundary(source: &str, index: usize) -> usize {
    let mut index = index.min(source.len());
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}
