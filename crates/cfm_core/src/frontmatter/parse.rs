//! Header field decoding.
//!
//! # Responsibility
//! - Turn de-commented header lines into a validated `Frontmatter`.
//! - Report malformed input with source line numbers.
//!
//! # Invariants
//! - A key appears at most once per header.
//! - List items attach only to a key whose inline value is empty.
//! - Successful results always pass `Frontmatter::validate()`.

use super::block::{extract_block, HeaderLine};
use super::error::{FrontmatterError, FrontmatterResult};
use super::{
    CommentStyle, ExportEntry, Frontmatter, KEY_AI_NOTES, KEY_DEPENDS_ON, KEY_EXPORTS,
    KEY_INTENT, KEY_MUTATES_STATE, KEY_ROLE, KEY_WHEN_TO_LOAD,
};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

static KEY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*):(.*)$").expect("key line pattern is valid")
});
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-(?:\s+(.*))?$").expect("list item pattern is valid"));

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// `None` detects the style from the opening delimiter.
    pub style: Option<CommentStyle>,
    /// Rejects unrecognized keys instead of keeping them in `extra`.
    pub strict: bool,
}

impl ParseOptions {
    /// Lenient options with the comment style implied by `path`'s extension.
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let style = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(CommentStyle::from_extension);
        Self {
            style,
            strict: false,
        }
    }
}

/// Parsed header plus the code that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub frontmatter: Frontmatter,
    pub style: CommentStyle,
    /// Source text after the closing delimiter.
    pub body: String,
}

/// Parses only the header of `source`.
pub fn parse_frontmatter(source: &str, options: &ParseOptions) -> FrontmatterResult<Frontmatter> {
    parse_source(source, options).map(|document| document.frontmatter)
}

/// Parses the header of `source` and keeps the remaining body.
pub fn parse_source(source: &str, options: &ParseOptions) -> FrontmatterResult<SourceDocument> {
    let block = extract_block(source, options.style)?;
    let frontmatter = decode_lines(&block.lines, options.strict)?;
    Ok(SourceDocument {
        frontmatter,
        style: block.style,
        body: block.body(source),
    })
}

/// Reads and parses one source file.
///
/// # Side effects
/// - Emits `frontmatter_parse` logging events with duration and status.
pub fn parse_file(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> FrontmatterResult<SourceDocument> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = std::fs::read_to_string(path)
        .map_err(FrontmatterError::from)
        .and_then(|source| parse_source(&source, options));

    match &result {
        Ok(document) => info!(
            "event=frontmatter_parse module=frontmatter status=ok path={} style={:?} exports={} duration_ms={}",
            path.display(),
            document.style,
            document.frontmatter.exports.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=frontmatter_parse module=frontmatter status=error path={} duration_ms={} error_code={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }

    result
}

/// Key line with any list items collected under it.
#[derive(Debug)]
struct RawField {
    line: usize,
    key: String,
    inline: String,
    items: Vec<(usize, String)>,
}

fn decode_lines(lines: &[HeaderLine], strict: bool) -> FrontmatterResult<Frontmatter> {
    let fields = group_fields(lines)?;

    let mut frontmatter = Frontmatter::default();
    let mut seen = BTreeSet::<String>::new();

    for field in fields {
        if !seen.insert(field.key.clone()) {
            return Err(FrontmatterError::DuplicateKey {
                line: field.line,
                key: field.key,
            });
        }

        match field.key.as_str() {
            KEY_INTENT => frontmatter.intent = scalar_field(&field)?,
            KEY_ROLE => frontmatter.role = Some(scalar_field(&field)?),
            KEY_WHEN_TO_LOAD => frontmatter.when_to_load = Some(scalar_field(&field)?),
            KEY_AI_NOTES => frontmatter.ai_notes = Some(scalar_field(&field)?),
            KEY_MUTATES_STATE => frontmatter.mutates_state = bool_field(&field)?,
            KEY_EXPORTS => {
                frontmatter.exports = list_field(&field)?
                    .iter()
                    .map(|text| ExportEntry::parse(text))
                    .collect();
            }
            KEY_DEPENDS_ON => {
                frontmatter.depends_on = list_field(&field)?.into_iter().collect();
            }
            _ if strict => {
                return Err(FrontmatterError::UnknownKey {
                    line: field.line,
                    key: field.key,
                });
            }
            _ => {
                let raw = extra_field(&field)?;
                frontmatter.extra.insert(field.key, raw);
            }
        }
    }

    frontmatter.validate()?;
    Ok(frontmatter)
}

fn group_fields(lines: &[HeaderLine]) -> FrontmatterResult<Vec<RawField>> {
    let mut fields: Vec<RawField> = Vec::new();

    for line in lines {
        if line.text.trim().is_empty() {
            continue;
        }

        if let Some(captures) = KEY_LINE.captures(&line.text) {
            fields.push(RawField {
                line: line.number,
                key: captures[1].to_string(),
                inline: captures[2].trim().to_string(),
                items: Vec::new(),
            });
            continue;
        }

        if let Some(captures) = LIST_ITEM.captures(&line.text) {
            let item = captures
                .get(1)
                .map_or("", |value| value.as_str())
                .trim()
                .to_string();
            match fields.last_mut() {
                Some(field) if field.inline.is_empty() => field.items.push((line.number, item)),
                _ => return Err(FrontmatterError::OrphanListItem { line: line.number }),
            }
            continue;
        }

        return Err(FrontmatterError::MalformedLine {
            line: line.number,
            content: line.text.clone(),
        });
    }

    Ok(fields)
}

fn scalar_field(field: &RawField) -> FrontmatterResult<String> {
    if !field.items.is_empty() {
        return Err(invalid(field, field.line, "expected a single value, found a list"));
    }
    decode_scalar(field, field.line, &field.inline)
}

fn bool_field(field: &RawField) -> FrontmatterResult<bool> {
    if !field.items.is_empty() {
        return Err(invalid(field, field.line, "expected true or false, found a list"));
    }
    match field.inline.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid(
            field,
            field.line,
            format!("expected true or false, found `{other}`"),
        )),
    }
}

fn list_field(field: &RawField) -> FrontmatterResult<Vec<String>> {
    if !field.items.is_empty() {
        return field
            .items
            .iter()
            .map(|(line, text)| decode_scalar(field, *line, text))
            .collect();
    }

    if field.inline.is_empty() {
        return Ok(Vec::new());
    }
    if field.inline.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(&field.inline)
            .map_err(|err| invalid(field, field.line, err.to_string()));
    }
    Ok(vec![decode_scalar(field, field.line, &field.inline)?])
}

fn extra_field(field: &RawField) -> FrontmatterResult<String> {
    if field.items.is_empty() {
        return Ok(field.inline.clone());
    }
    let items = list_field(field)?;
    serde_json::to_string(&items).map_err(|err| invalid(field, field.line, err.to_string()))
}

fn decode_scalar(field: &RawField, line: usize, text: &str) -> FrontmatterResult<String> {
    if text.starts_with('"') {
        return serde_json::from_str::<String>(text)
            .map_err(|err| invalid(field, line, err.to_string()));
    }
    Ok(text.trim().to_string())
}

fn invalid(field: &RawField, line: usize, message: impl Into<String>) -> FrontmatterError {
    FrontmatterError::InvalidValue {
        line,
        key: field.key.clone(),
        message: message.into(),
    }
}
