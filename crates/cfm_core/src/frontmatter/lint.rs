//! Header-versus-source consistency checks.
//!
//! Warnings are advisory and never turn a parsed header into an error.

use super::Frontmatter;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Advisory finding about a parsed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// Exported symbol never appears in the file body.
    UnusedExport(String),
    /// `depends_on` path does not exist relative to the file.
    MissingDependency(String),
}

impl Display for LintWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnusedExport(symbol) => {
                write!(f, "exported symbol `{symbol}` is not defined in the file body")
            }
            Self::MissingDependency(path) => write!(f, "dependency `{path}` does not exist"),
        }
    }
}

/// Checks `frontmatter` against the file `body`.
///
/// Dependency paths are only checked when `base_dir` is given.
pub fn lint(frontmatter: &Frontmatter, body: &str, base_dir: Option<&Path>) -> Vec<LintWarning> {
    let mut warnings: Vec<LintWarning> = frontmatter
        .export_symbols()
        .filter(|symbol| !contains_word(body, symbol))
        .map(|symbol| LintWarning::UnusedExport(symbol.to_string()))
        .collect();

    if let Some(base_dir) = base_dir {
        warnings.extend(
            frontmatter
                .depends_on
                .iter()
                .filter(|path| !base_dir.join(path.as_str()).exists())
                .map(|path| LintWarning::MissingDependency(path.clone())),
        );
    }

    warnings
}

/// Whole-word search; `Type::method` is matched by its last segment.
fn contains_word(haystack: &str, word: &str) -> bool {
    let needle = word.rsplit("::").next().unwrap_or(word);
    if needle.is_empty() {
        return false;
    }
    let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(needle));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(haystack),
        Err(_) => haystack.contains(needle),
    }
}

#[cfg(test)]
mod tests {
    use super::{contains_word, lint, LintWarning};
    use crate::frontmatter::{ExportEntry, Frontmatter};
    use std::fs;

    #[test]
    fn contains_word_respects_identifier_boundaries() {
        assert!(contains_word("def fetch_user(id):", "fetch_user"));
        assert!(!contains_word("def fetch_users(id):", "fetch_user"));
        assert!(!contains_word("prefetch_user = 1", "fetch_user"));
        assert!(contains_word("x = fetch_users; fetch_user()", "fetch_user"));
        assert!(contains_word("fetch_user", "fetch_user"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn contains_word_matches_path_symbols_by_last_segment() {
        let body = "impl User {\n    pub fn new() -> Self { todo!() }\n}\n";
        assert!(contains_word(body, "User::new"));
        assert!(!contains_word(body, "User::renew"));
    }

    #[test]
    fn reports_exports_missing_from_body() {
        let mut header = Frontmatter::new("demo");
        header.exports.push(ExportEntry::new("fetch_user", ""));
        header.exports.push(ExportEntry::new("delete_user", ""));

        let warnings = lint(&header, "def fetch_user(user_id):\n    pass\n", None);
        assert_eq!(
            warnings,
            vec![LintWarning::UnusedExport("delete_user".to_string())]
        );
    }

    #[test]
    fn reports_missing_dependencies_relative_to_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present.py"), "").unwrap();

        let mut header = Frontmatter::new("demo");
        header.depends_on.insert("present.py".to_string());
        header.depends_on.insert("database.py".to_string());

        let warnings = lint(&header, "", Some(dir.path()));
        assert_eq!(
            warnings,
            vec![LintWarning::MissingDependency("database.py".to_string())]
        );
    }

    #[test]
    fn skips_dependency_check_without_base_dir() {
        let mut header = Frontmatter::new("demo");
        header.depends_on.insert("database.py".to_string());
        assert!(lint(&header, "", None).is_empty());
    }
}
