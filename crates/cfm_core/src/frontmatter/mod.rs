//! Code Frontmatter header model, parsing and tooling.
//!
//! # Responsibility
//! - Locate the header block at the top of a source file.
//! - Decode header fields into a typed `Frontmatter` value.
//! - Render and lint headers for authoring tools.
//!
//! # Invariants
//! - A parsed `Frontmatter` always passes `Frontmatter::validate()`.
//! - Header content never influences code below the closing delimiter.
//!
//! # See also
//! - src/example.rs

pub mod block;
pub mod error;
pub mod lint;
pub mod parse;
pub mod render;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use block::{extract_block, HeaderBlock, HeaderLine};
pub use error::{FrontmatterError, FrontmatterResult, FrontmatterValidationError};
pub use lint::{lint, LintWarning};
pub use parse::{parse_file, parse_frontmatter, parse_source, ParseOptions, SourceDocument};
pub use render::render;

/// Header key for the one-line purpose description.
pub const KEY_INTENT: &str = "intent";
/// Header key for the classification tag.
pub const KEY_ROLE: &str = "role";
/// Header key for exported symbols.
pub const KEY_EXPORTS: &str = "exports";
/// Header key for referenced file paths.
pub const KEY_DEPENDS_ON: &str = "depends_on";
/// Header key for load guidance.
pub const KEY_WHEN_TO_LOAD: &str = "when_to_load";
/// Header key for the mutation flag.
pub const KEY_MUTATES_STATE: &str = "mutates_state";
/// Header key for free-form reader notes.
pub const KEY_AI_NOTES: &str = "ai_notes";

/// Line-comment marker of the language hosting the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStyle {
    /// `#` (Python, shell, TOML, YAML).
    Hash,
    /// `//` (Rust, C family, JavaScript, Go).
    DoubleSlash,
    /// `--` (SQL, Lua, Haskell).
    DoubleDash,
}

const ALL_STYLES: &[CommentStyle] = &[
    CommentStyle::Hash,
    CommentStyle::DoubleSlash,
    CommentStyle::DoubleDash,
];

impl CommentStyle {
    /// Every supported style, in auto-detection order.
    pub fn all() -> &'static [CommentStyle] {
        ALL_STYLES
    }

    /// Comment marker prefixed to every header line.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Hash => "#",
            Self::DoubleSlash => "//",
            Self::DoubleDash => "--",
        }
    }

    /// Full opening/closing delimiter line.
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Hash => "#---",
            Self::DoubleSlash => "//---",
            Self::DoubleDash => "-----",
        }
    }

    /// Picks the style for a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "py" | "sh" | "rb" | "toml" | "yaml" | "yml" => Some(Self::Hash),
            "rs" | "js" | "ts" | "go" | "c" | "h" | "cpp" | "java" | "kt" | "swift" => {
                Some(Self::DoubleSlash)
            }
            "sql" | "lua" | "hs" => Some(Self::DoubleDash),
            _ => None,
        }
    }

    /// Returns the style whose delimiter equals the trimmed `line`.
    pub fn detect(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        Self::all()
            .iter()
            .copied()
            .find(|style| style.delimiter() == trimmed)
    }
}

/// One exported symbol declared in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub symbol: String,
    /// Empty when the header only names the symbol.
    pub description: String,
}

impl ExportEntry {
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
        }
    }

    /// Splits `symbol: description` on the first separator colon.
    ///
    /// `::` path separators stay inside the symbol, so `Type::method: doc`
    /// yields symbol `Type::method`.
    pub fn parse(text: &str) -> Self {
        match separator_index(text) {
            Some(index) => {
                let (symbol, rest) = text.split_at(index);
                let separator_len = rest.chars().next().map_or(0, char::len_utf8);
                Self::new(symbol.trim(), rest[separator_len..].trim())
            }
            None => Self::new(text.trim(), ""),
        }
    }

    /// Header text form, inverse of `ExportEntry::parse`.
    pub fn to_header_text(&self) -> String {
        if self.description.is_empty() {
            self.symbol.clone()
        } else {
            format!("{}: {}", self.symbol, self.description)
        }
    }
}

/// Byte index of the first full-width colon or lone ASCII colon.
fn separator_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    text.char_indices()
        .find(|&(index, c)| match c {
            '：' => true,
            ':' => {
                let prev_colon = index > 0 && bytes.get(index - 1) == Some(&b':');
                let next_colon = bytes.get(index + 1) == Some(&b':');
                !prev_colon && !next_colon
            }
            _ => false,
        })
        .map(|(index, _)| index)
}

/// Decoded Code Frontmatter header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    pub intent: String,
    pub role: Option<String>,
    pub exports: Vec<ExportEntry>,
    pub depends_on: BTreeSet<String>,
    pub when_to_load: Option<String>,
    /// Declared by the author; not checked against code behavior.
    pub mutates_state: bool,
    pub ai_notes: Option<String>,
    /// Unrecognized keys with their raw value text (lenient mode only).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Creates a header with only the required intent set.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }

    /// Validates field-level header invariants.
    pub fn validate(&self) -> Result<(), FrontmatterValidationError> {
        if self.intent.trim().is_empty() {
            return Err(FrontmatterValidationError::MissingIntent);
        }

        let mut seen = BTreeSet::<&str>::new();
        for export in &self.exports {
            let symbol = export.symbol.trim();
            if symbol.is_empty() {
                return Err(FrontmatterValidationError::EmptyExportSymbol);
            }
            if separator_index(symbol).is_some() || symbol.ends_with(':') {
                return Err(FrontmatterValidationError::InvalidExportSymbol(
                    symbol.to_string(),
                ));
            }
            if !seen.insert(symbol) {
                return Err(FrontmatterValidationError::DuplicateExport(
                    symbol.to_string(),
                ));
            }
        }

        if self.depends_on.iter().any(|path| path.trim().is_empty()) {
            return Err(FrontmatterValidationError::EmptyDependency);
        }

        Ok(())
    }

    /// Returns exported symbol names in declaration order.
    pub fn export_symbols(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(|export| export.symbol.as_str())
    }
}
