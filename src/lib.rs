//! idbench library
//!
//! Bulk-inserts synthetic rows keyed by UUID v4, Snowflake IDs or ULIDs into
//! MySQL, one row per statement, so the resulting InnoDB secondary-index
//! layouts can be compared.
//!
//! # Crates
//!
//! - `idbench_generator` - identifier kinds and the per-run row generator
//! - `idbench_populate_mysql` - prepared-statement insert loop against MySQL
//!
//! # CLI Usage
//!
//! ```bash
//! # Insert one million UUID-keyed rows
//! idbench insert --mode uuid --count 1000000
//!
//! # Print the DDL for the three tables
//! idbench schema
//! ```

pub mod cli;
pub mod populate;

pub use cli::{Cli, Commands};
