//! The three identifier kinds a run can target.

use crate::generator::GeneratorError;
use std::fmt;
use std::str::FromStr;

/// Identifier kind, one per target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// Random version-4 UUID, stored as its 36-character string form.
    Uuid,
    /// 64-bit time/node/sequence composite.
    Snowflake,
    /// 26-character monotonic ULID.
    Ulid,
}

impl IdKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [IdKind; 3] = [IdKind::Uuid, IdKind::Snowflake, IdKind::Ulid];

    /// Lowercase name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Uuid => "uuid",
            IdKind::Snowflake => "snowflake",
            IdKind::Ulid => "ulid",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdKind::Uuid),
            "snowflake" => Ok(IdKind::Snowflake),
            "ulid" => Ok(IdKind::Ulid),
            _ => Err(GeneratorError::UnknownKind(s.to_string())),
        }
    }
}
