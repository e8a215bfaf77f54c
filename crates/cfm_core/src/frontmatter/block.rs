//! Header block extraction.
//!
//! # Invariants
//! - Only a shebang on the first line and blank lines may precede the opening
//!   delimiter.
//! - Every line between the delimiters carries the comment marker.

use super::error::{FrontmatterError, FrontmatterResult};
use super::CommentStyle;

/// One de-commented header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    /// 1-based line number in the source file.
    pub number: usize,
    pub text: String,
}

/// Header content located at the top of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    pub style: CommentStyle,
    /// Lines between the delimiters, marker stripped.
    pub lines: Vec<HeaderLine>,
    /// 0-based index of the first line after the closing delimiter.
    pub body_start: usize,
}

impl HeaderBlock {
    /// Returns the source text after the closing delimiter.
    pub fn body(&self, source: &str) -> String {
        source
            .lines()
            .skip(self.body_start)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Extracts the header block from `source`.
///
/// With `style = None` the comment style is detected from the opening
/// delimiter.
///
/// # Errors
/// - `MissingHeader` when the first content line is not a delimiter.
/// - `MalformedLine` when a header line lacks the comment marker.
/// - `UnterminatedHeader` when the closing delimiter is missing.
pub fn extract_block(
    source: &str,
    style: Option<CommentStyle>,
) -> FrontmatterResult<HeaderBlock> {
    let lines: Vec<&str> = source.lines().collect();
    let opening = first_content_line(&lines).ok_or(FrontmatterError::MissingHeader)?;
    let opening_text = lines
        .get(opening)
        .copied()
        .ok_or(FrontmatterError::MissingHeader)?;

    let style = match style {
        Some(style) if style.delimiter() == opening_text.trim() => style,
        Some(_) => return Err(FrontmatterError::MissingHeader),
        None => CommentStyle::detect(opening_text).ok_or(FrontmatterError::MissingHeader)?,
    };

    let mut header_lines = Vec::new();
    for (index, raw) in lines.iter().enumerate().skip(opening + 1) {
        if raw.trim() == style.delimiter() {
            return Ok(HeaderBlock {
                style,
                lines: header_lines,
                body_start: index + 1,
            });
        }

        let Some(rest) = raw.trim_start().strip_prefix(style.marker()) else {
            return Err(FrontmatterError::MalformedLine {
                line: index + 1,
                content: raw.to_string(),
            });
        };
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        header_lines.push(HeaderLine {
            number: index + 1,
            text: text.trim_end().to_string(),
        });
    }

    Err(FrontmatterError::UnterminatedHeader {
        opened_at: opening + 1,
    })
}

fn first_content_line(lines: &[&str]) -> Option<usize> {
    let start = match lines.first() {
        Some(first) if is_shebang(first) => 1,
        _ => 0,
    };
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(index, _)| index)
}

/// Interpreter line; `#![...]` is a Rust inner attribute, not a shebang.
fn is_shebang(line: &str) -> bool {
    line.starts_with("#!") && !line.starts_with("#![")
}
