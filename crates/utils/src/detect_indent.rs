/// Indentation unit of a JSON document, taken from its first indented line.
///
/// Returns the leading whitespace of that line (tabs or spaces). Falls back to two
/// spaces when nothing is indented, the layout `npm` itself writes.
#[must_use]
pub fn detect_indent(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .find(|indent| !indent.is_empty())
        .unwrap_or("  ")
        .to_string()
}
