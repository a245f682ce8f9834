//! Whitespace canonicalization for extracted bodies.

/// Trim trailing whitespace on every line, drop leading and trailing blank lines, and remove the indentation
/// shared by all non-blank lines. Line endings come out as `\n`.
pub fn canonicalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
        return String::new();
    };
    let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| indent_width(l))
        .min()
        .unwrap_or(0);

    body.iter()
        .map(|l| if l.is_empty() { "" } else { &l[indent..] })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte width of the leading spaces/tabs (both single-byte).
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
