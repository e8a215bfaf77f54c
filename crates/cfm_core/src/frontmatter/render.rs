//! Header rendering.

use super::{
    CommentStyle, Frontmatter, KEY_AI_NOTES, KEY_DEPENDS_ON, KEY_EXPORTS, KEY_INTENT,
    KEY_MUTATES_STATE, KEY_ROLE, KEY_WHEN_TO_LOAD,
};
use serde_json::Value;

/// Renders `frontmatter` as a header block in canonical field order.
///
/// String values are JSON-quoted; `extra` values are written as stored.
/// Parsing the output yields a value equal to `frontmatter`.
pub fn render(frontmatter: &Frontmatter, style: CommentStyle) -> String {
    let mut lines = vec![style.delimiter().to_string()];
    let mut push = |text: String| lines.push(format!("{} {text}", style.marker()));

    push(format!("{KEY_INTENT}: {}", quote(&frontmatter.intent)));
    if let Some(role) = &frontmatter.role {
        push(format!("{KEY_ROLE}: {}", quote(role)));
    }
    if !frontmatter.exports.is_empty() {
        push(format!("{KEY_EXPORTS}:"));
        for export in &frontmatter.exports {
            push(format!("  - {}", quote(&export.to_header_text())));
        }
    }
    if !frontmatter.depends_on.is_empty() {
        push(format!("{KEY_DEPENDS_ON}:"));
        for path in &frontmatter.depends_on {
            push(format!("  - {}", quote(path)));
        }
    }
    if let Some(when_to_load) = &frontmatter.when_to_load {
        push(format!("{KEY_WHEN_TO_LOAD}: {}", quote(when_to_load)));
    }
    push(format!("{KEY_MUTATES_STATE}: {}", frontmatter.mutates_state));
    if let Some(notes) = &frontmatter.ai_notes {
        push(format!("{KEY_AI_NOTES}: {}", quote(notes)));
    }
    for (key, raw) in &frontmatter.extra {
        push(format!("{key}: {raw}"));
    }

    lines.push(style.delimiter().to_string());
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn quote(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::frontmatter::{
        parse_frontmatter, CommentStyle, ExportEntry, Frontmatter, ParseOptions,
    };

    fn sample() -> Frontmatter {
        let mut header = Frontmatter::new("demo \"quoted\" intent");
        header.role = Some("example".to_string());
        header.exports.push(ExportEntry::new("fetch_user", "根据 ID 查询用户信息"));
        header.exports.push(ExportEntry::new("User", ""));
        header.exports.push(ExportEntry::new("User::new", ""));
        header
            .exports
            .push(ExportEntry::new("Type::method", "path symbol: with colon"));
        header.depends_on.insert("database.py".to_string());
        header.when_to_load = Some("when reading examples".to_string());
        header.mutates_state = true;
        header
            .extra
            .insert("owner".to_string(), "\"team-a\"".to_string());
        header
    }

    #[test]
    fn renders_canonical_layout() {
        let rendered = render(&Frontmatter::new("x"), CommentStyle::Hash);
        assert_eq!(rendered, "#---\n# intent: \"x\"\n# mutates_state: false\n#---\n");
    }

    #[test]
    fn rendered_header_parses_back_to_same_value() {
        let header = sample();
        for style in CommentStyle::all() {
            let rendered = render(&header, *style);
            let parsed = parse_frontmatter(&rendered, &ParseOptions::default()).unwrap();
            assert_eq!(parsed, header, "style {style:?} rendered:\n{rendered}");
        }
    }
}
