use super::commands::is_comment;
use super::types::SourceLine;

/// Scan source text into step-candidate lines.
///
/// Blank lines and `#` comments are dropped as candidates, but the original
/// 1-based numbering of the surviving lines is preserved.
pub fn scan_lines(source: &str) -> Vec<SourceLine> {
    let mut out = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let trimmed = raw.trim();
        if is_comment(trimmed) {
            continue;
        }
        out.push(SourceLine {
            number: idx as u32 + 1,
            text: trimmed.to_string(),
        });
    }
    out
}

/// Text of a 1-based source line, if it exists.
pub fn line_text(source: &str, number: u32) -> Option<&str> {
    if number == 0 {
        return None;
    }
    source.lines().nth(number as usize - 1)
}
