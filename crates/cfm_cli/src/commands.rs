//! Subcommand implementations.
//!
//! Each command returns its stdout text so `main` owns all printing.

use crate::cli::{DemoArgs, FileArgs, StyleArg};
use anyhow::{bail, Context, Result};
use cfm_core::{
    create_user, fetch_user, lint, parse_file, render, CommentStyle, ParseOptions,
    SourceDocument,
};
use log::warn;
use serde_json::json;

pub fn inspect(args: &FileArgs) -> Result<String> {
    let document = load(args)?;
    serde_json::to_string_pretty(&document.frontmatter).context("failed to encode header")
}

pub fn check(args: &FileArgs, deny_warnings: bool) -> Result<String> {
    let document = load(args)?;
    let base_dir = args.path.parent();
    let warnings = lint(&document.frontmatter, &document.body, base_dir);

    let mut report: Vec<String> = warnings
        .iter()
        .map(|warning| {
            warn!(
                "event=frontmatter_lint module=cli status=warn path={} warning={}",
                args.path.display(),
                warning
            );
            format!("{}: warning: {warning}", args.path.display())
        })
        .collect();

    if deny_warnings && !warnings.is_empty() {
        bail!(
            "{}\n{} warning(s) in {}",
            report.join("\n"),
            warnings.len(),
            args.path.display()
        );
    }

    report.push(format!(
        "{}: ok ({} export(s), {} warning(s))",
        args.path.display(),
        document.frontmatter.exports.len(),
        warnings.len()
    ));
    Ok(report.join("\n"))
}

pub fn render_header(args: &FileArgs, style: Option<StyleArg>) -> Result<String> {
    let document = load(args)?;
    let style = style.map_or(document.style, CommentStyle::from);
    Ok(render(&document.frontmatter, style))
}

pub fn demo(args: &DemoArgs) -> Result<String> {
    let output = json!({
        "fetch_user": fetch_user(args.id),
        "create_user": create_user(args.name.as_str(), args.email.as_str()),
    });
    serde_json::to_string_pretty(&output).context("failed to encode demo output")
}

pub fn version() -> String {
    format!(
        "cfm_core ping={}\ncfm_core version={}",
        cfm_core::ping(),
        cfm_core::core_version()
    )
}

fn load(args: &FileArgs) -> Result<SourceDocument> {
    let mut options = ParseOptions::for_path(&args.path);
    options.strict = args.strict;
    parse_file(&args.path, &options)
        .with_context(|| format!("failed to read header from {}", args.path.display()))
}

#[cfg(test)]
mod tests {
    use super::{check, demo, inspect, render_header};
    use crate::cli::{DemoArgs, FileArgs, StyleArg};
    use std::fs;
    use std::path::Path;

    fn write_fixture(dir: &Path) -> FileArgs {
        let path = dir.join("sample.py");
        fs::write(
            &path,
            "#---\n# intent: demo\n# exports:\n#   - \"fetch_user: lookup\"\n#   - \"gone: removed\"\n# owner: me\n#---\ndef fetch_user(id):\n    pass\n",
        )
        .unwrap();
        FileArgs {
            path,
            strict: false,
        }
    }

    #[test]
    fn inspect_prints_json_header() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_fixture(dir.path());

        let output = inspect(&args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["intent"], "demo");
        assert_eq!(value["exports"][0]["symbol"], "fetch_user");
        assert_eq!(value["extra"]["owner"], "me");
    }

    #[test]
    fn inspect_strict_fails_on_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_fixture(dir.path());
        args.strict = true;

        let err = inspect(&args).unwrap_err();
        assert!(format!("{err:#}").contains("unknown key `owner`"));
    }

    #[test]
    fn check_reports_unused_export() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_fixture(dir.path());

        let output = check(&args, false).unwrap();
        assert!(output.contains("`gone`"));
        assert!(output.contains("1 warning(s)"));
        assert!(check(&args, true).is_err());
    }

    #[test]
    fn render_switches_comment_style() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_fixture(dir.path());

        let output = render_header(&args, Some(StyleArg::Slash)).unwrap();
        assert!(output.starts_with("//---\n// intent: \"demo\"\n"));
        assert!(output.ends_with("//---\n"));
    }

    #[test]
    fn demo_prints_both_stub_results() {
        let args = DemoArgs {
            id: 42,
            name: String::new(),
            email: String::new(),
        };
        let value: serde_json::Value = serde_json::from_str(&demo(&args).unwrap()).unwrap();
        assert_eq!(value["fetch_user"]["id"], 42);
        assert_eq!(value["fetch_user"]["name"], "示例用户");
        assert_eq!(value["create_user"]["id"], 1);
        assert_eq!(value["create_user"]["name"], "");
    }
}
