//! Frontmatter error types.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FrontmatterResult<T> = Result<T, FrontmatterError>;

/// Error raised while locating, decoding or validating a header.
///
/// Line numbers are 1-based source line numbers.
#[derive(Debug)]
pub enum FrontmatterError {
    Io(std::io::Error),
    /// First non-blank line is not an opening delimiter.
    MissingHeader,
    UnterminatedHeader {
        opened_at: usize,
    },
    MalformedLine {
        line: usize,
        content: String,
    },
    DuplicateKey {
        line: usize,
        key: String,
    },
    /// Rejected in strict mode only.
    UnknownKey {
        line: usize,
        key: String,
    },
    OrphanListItem {
        line: usize,
    },
    InvalidValue {
        line: usize,
        key: String,
        message: String,
    },
    Validation(FrontmatterValidationError),
}

impl FrontmatterError {
    /// Source line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnterminatedHeader { opened_at } => Some(*opened_at),
            Self::MalformedLine { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::UnknownKey { line, .. }
            | Self::OrphanListItem { line }
            | Self::InvalidValue { line, .. } => Some(*line),
            Self::Io(_) | Self::MissingHeader | Self::Validation(_) => None,
        }
    }

    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::MissingHeader => "missing_header",
            Self::UnterminatedHeader { .. } => "unterminated_header",
            Self::MalformedLine { .. } => "malformed_line",
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::UnknownKey { .. } => "unknown_key",
            Self::OrphanListItem { .. } => "orphan_list_item",
            Self::InvalidValue { .. } => "invalid_value",
            Self::Validation(_) => "validation",
        }
    }
}

impl Display for FrontmatterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::MissingHeader => write!(f, "no frontmatter header found at top of file"),
            Self::UnterminatedHeader { opened_at } => {
                write!(f, "header opened at line {opened_at} is never closed")
            }
            Self::MalformedLine { line, content } => {
                write!(f, "line {line}: malformed header line `{content}`")
            }
            Self::DuplicateKey { line, key } => write!(f, "line {line}: duplicate key `{key}`"),
            Self::UnknownKey { line, key } => write!(f, "line {line}: unknown key `{key}`"),
            Self::OrphanListItem { line } => {
                write!(f, "line {line}: list item does not belong to any key")
            }
            Self::InvalidValue { line, key, message } => {
                write!(f, "line {line}: invalid value for `{key}`: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FrontmatterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FrontmatterError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<FrontmatterValidationError> for FrontmatterError {
    fn from(value: FrontmatterValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Field-level header validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValidationError {
    MissingIntent,
    EmptyExportSymbol,
    /// Symbol has a lone or trailing colon that would be read as the separator.
    InvalidExportSymbol(String),
    DuplicateExport(String),
    EmptyDependency,
}

impl Display for FrontmatterValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIntent => write!(f, "header intent must not be empty"),
            Self::EmptyExportSymbol => write!(f, "header contains export with empty symbol"),
            Self::InvalidExportSymbol(symbol) => {
                write!(f, "header export symbol contains a separator colon: {symbol}")
            }
            Self::DuplicateExport(symbol) => {
                write!(f, "header export is duplicated: {symbol}")
            }
            Self::EmptyDependency => write!(f, "header contains empty depends_on path"),
        }
    }
}

impl Error for FrontmatterValidationError {}
