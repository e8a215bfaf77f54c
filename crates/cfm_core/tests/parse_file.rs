use cfm_core::{
    parse_file, render, CommentStyle, ExportEntry, FrontmatterError, ParseOptions,
};
use std::fs;

const PYTHON_EXAMPLE: &str = r#"#---
# intent: "示例文件：展示如何在 Python 文件中使用 Code Frontmatter 表头"
# role: example
# exports:
#   - "fetch_user: 根据 ID 查询用户信息"
#   - "create_user: 创建新用户并返回用户对象"
# depends_on: ["database.py"]
# when_to_load: "需要查看 CFM 表头在 Python 文件中的格式示例时加载"
# mutates_state: true
# ai_notes: "这是一个纯演示文件，不包含任何实际业务逻辑"
#---

def fetch_user(user_id):
    return None
"#;

#[test]
fn parse_file_reads_python_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.py");
    fs::write(&path, PYTHON_EXAMPLE).unwrap();

    let document = parse_file(&path, &ParseOptions::for_path(&path)).unwrap();
    assert_eq!(document.style, CommentStyle::Hash);
    assert_eq!(document.frontmatter.exports.len(), 2);
    assert!(document.body.contains("def fetch_user"));
}

#[test]
fn parse_file_reads_double_dash_sql_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.sql");
    fs::write(
        &path,
        "-----\n-- intent: \"seed demo users\"\n-- exports:\n--   - \"users: demo table\"\n-- mutates_state: true\n-----\nCREATE TABLE users (id INTEGER);\n",
    )
    .unwrap();

    let options = ParseOptions::for_path(&path);
    assert_eq!(options.style, Some(CommentStyle::DoubleDash));

    let document = parse_file(&path, &options).unwrap();
    assert_eq!(document.style, CommentStyle::DoubleDash);
    assert_eq!(document.frontmatter.intent, "seed demo users");
    assert_eq!(
        document.frontmatter.exports,
        vec![ExportEntry::new("users", "demo table")]
    );
    assert!(document.frontmatter.mutates_state);
    assert_eq!(document.body, "CREATE TABLE users (id INTEGER);");
}

#[test]
fn parse_file_reports_io_error_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("absent.py"), &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, FrontmatterError::Io(_)));
    assert_eq!(err.code(), "io");
}

#[test]
fn parse_file_rejects_style_from_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.rs");
    fs::write(&path, PYTHON_EXAMPLE).unwrap();

    let err = parse_file(&path, &ParseOptions::for_path(&path)).unwrap_err();
    assert!(matches!(err, FrontmatterError::MissingHeader));
}

#[test]
fn rendered_header_replaces_original_and_still_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.py");
    fs::write(&path, PYTHON_EXAMPLE).unwrap();
    let original = parse_file(&path, &ParseOptions::default()).unwrap();

    let rewritten = format!(
        "{}{}",
        render(&original.frontmatter, CommentStyle::Hash),
        original.body
    );
    fs::write(&path, rewritten).unwrap();

    let reparsed = parse_file(&path, &ParseOptions::default()).unwrap();
    assert_eq!(reparsed.frontmatter, original.frontmatter);
    assert_eq!(reparsed.body.trim(), original.body.trim());
}
