//! Code Frontmatter demonstration crate.
//!
//! Hosts the annotated example module and the tooling that reads its header.

pub mod example;
pub mod frontmatter;
pub mod logging;

pub use example::{create_user, fetch_user, User};
pub use frontmatter::{
    extract_block, lint, parse_file, parse_frontmatter, parse_source, render, CommentStyle,
    ExportEntry, Frontmatter, FrontmatterError, FrontmatterResult, FrontmatterValidationError,
    LintWarning, ParseOptions, SourceDocument,
};
pub use logging::{default_log_level, init_logging, logging_status};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
