//! Generated rows.

use std::fmt;

/// A generated identifier, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedId {
    /// Canonical hyphenated lowercase UUID string.
    Uuid(String),
    Snowflake(u64),
    /// 26-character Crockford base32 string.
    Ulid(String),
}

impl fmt::Display for GeneratedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedId::Uuid(s) | GeneratedId::Ulid(s) => f.write_str(s),
            GeneratedId::Snowflake(id) => write!(f, "{id}"),
        }
    }
}

/// One row destined for a `users_*` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// Zero-based position within the run.
    pub index: u64,
    pub id: GeneratedId,
    pub name: String,
}

/// Name stored alongside the identifier for the row at `index`.
pub fn user_name(index: u64) -> String {
    format!("User_{index}")
}
