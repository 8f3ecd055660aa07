//! Identifier and row generators for the idbench bulk insert harness.
//!
//! This crate provides the `IdGenerator` which produces one `UserRow` per
//! call, carrying an identifier of the selected kind and a `User_<index>`
//! name. A generator lives for exactly one run.
//!
//! # Architecture
//!
//! ```text
//!        IdKind
//!          │
//!          ▼
//! ┌──────────────────┐
//! │   IdGenerator    │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - source        │──► uuid v4 │ snowflake(node) │ monotonic ulid
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    UserRow { index, id, name }
//! ```
//!
//! # Example
//!
//! ```rust
//! use idbench_generator::{GeneratedId, IdGenerator, IdKind};
//!
//! let mut generator = IdGenerator::new(IdKind::Snowflake, Some(42));
//! let row = generator.next_row().unwrap();
//! assert_eq!(row.name, "User_0");
//! assert!(matches!(row.id, GeneratedId::Snowflake(_)));
//! ```

pub mod generator;
pub mod generators;
pub mod kind;
pub mod row;

pub use generator::{GeneratorError, IdGenerator};
pub use generators::snowflake::SnowflakeGenerator;
pub use generators::ulid::UlidGenerator;
pub use kind::IdKind;
pub use row::{user_name, GeneratedId, UserRow};
