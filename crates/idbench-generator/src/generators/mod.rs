//! Identifier generators, one module per kind.

pub mod snowflake;
pub mod ulid;
pub mod uuid;
