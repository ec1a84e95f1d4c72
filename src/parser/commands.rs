/// Header line of the one loop the run stub recognizes.
pub const FIB_LOOP_HEADER: &str = "for i in range(10):";

/// Check if a line is blank or a `#` comment.
pub fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Extract the printable text of a `print(<args>)` line.
///
/// The trailing semicolon is optional. A single double-quoted literal is
/// unquoted; comma-separated arguments are trimmed and joined with single
/// spaces; any other argument text is returned as-is. Empty argument text
/// yields `None`, as does anything that is not a print line.
pub fn parse_print(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    let inner = trimmed.strip_prefix("print(")?.strip_suffix(')')?;

    if inner.is_empty() {
        return None;
    }

    if inner.len() >= 2 && inner.starts_with('"') && inner.ends_with('"') {
        return Some(inner[1..inner.len() - 1].to_string());
    }

    if inner.contains(',') {
        let joined = inner
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        return Some(joined);
    }

    Some(inner.to_string())
}

/// Check for the hard-coded Fibonacci loop header.
pub fn is_fib_loop_header(line: &str) -> bool {
    line.trim() == FIB_LOOP_HEADER
}

/// Left-hand identifier of an assignment-looking line.
///
/// Splits on the first `=` only; `==` comparisons and compound operators fall
/// out naturally because their left side never matches a bare identifier.
pub fn assignment_target(line: &str) -> Option<&str> {
    let (lhs, _) = line.split_once('=')?;
    Some(lhs.trim())
}
