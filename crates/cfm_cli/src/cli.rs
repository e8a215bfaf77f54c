//! Command-line definitions.

use cfm_core::CommentStyle;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cfm", version, about = "Inspect Code Frontmatter headers")]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "CFM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "CFM_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parsed header as JSON.
    Inspect(FileArgs),
    /// Parse the header and report lint warnings.
    Check {
        #[command(flatten)]
        file: FileArgs,
        /// Exit with failure when any warning is reported.
        #[arg(long)]
        deny_warnings: bool,
    },
    /// Print the header in canonical form.
    Render {
        #[command(flatten)]
        file: FileArgs,
        /// Output comment style; defaults to the file's own style.
        #[arg(long, value_enum)]
        style: Option<StyleArg>,
    },
    /// Run the example user stubs.
    Demo(DemoArgs),
    /// Print core ping and version.
    Version,
}

#[derive(Debug, Args)]
pub struct FileArgs {
    pub path: PathBuf,
    /// Reject unrecognized header keys.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// ID passed to the lookup stub.
    #[arg(long, default_value_t = 42)]
    pub id: i64,
    #[arg(long, default_value = "Alice")]
    pub name: String,
    #[arg(long, default_value = "alice@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Hash,
    Slash,
    Dash,
}

impl From<StyleArg> for CommentStyle {
    fn from(value: StyleArg) -> Self {
        match value {
            StyleArg::Hash => Self::Hash,
            StyleArg::Slash => Self::DoubleSlash,
            StyleArg::Dash => Self::DoubleDash,
        }
    }
}
