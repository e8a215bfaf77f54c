//---
// intent: "示例文件：展示如何在 Rust 文件中使用 Code Frontmatter 表头"
// role: example
// exports:
//   - "fetch_user: 根据 ID 查询用户信息"
//   - "create_user: 创建新用户并返回用户对象"
// depends_on: ["database.rs"]
// when_to_load: "需要查看 CFM 表头在 Rust 文件中的格式示例时加载"
// mutates_state: true
// ai_notes: "这是一个纯演示文件，不包含任何实际业务逻辑"
//---

//! Demonstration module for the Code Frontmatter header.
//!
//! The functions below are placeholders. They never touch storage.

use serde::{Deserialize, Serialize};

/// Full source text of this module, header included.
pub const SOURCE: &str = include_str!("example.rs");

const PLACEHOLDER_NAME: &str = "示例用户";
const PLACEHOLDER_EMAIL: &str = "user@example.com";
const PLACEHOLDER_CREATED_ID: i64 = 1;

/// User record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Looks up a user by ID.
///
/// Always returns a placeholder user echoing `user_id`.
pub fn fetch_user(user_id: i64) -> Option<User> {
    Some(User {
        id: user_id,
        name: PLACEHOLDER_NAME.to_string(),
        email: PLACEHOLDER_EMAIL.to_string(),
    })
}

/// Creates a user from the given name and email.
///
/// Inputs are stored as given; the ID is always `1`.
pub fn create_user(name: impl Into<String>, email: impl Into<String>) -> User {
    User {
        id: PLACEHOLDER_CREATED_ID,
        name: name.into(),
        email: email.into(),
    }
}
