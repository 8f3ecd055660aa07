//! MySQL bulk inserter for the idbench identifier benchmark.
//!
//! Inserts rows one at a time through a single prepared statement into one
//! of the `users_uuid`, `users_snowflake` or `users_ulid` tables. The tables
//! are expected to exist already; [`generate_create_table`] only renders
//! their DDL.

pub mod args;
pub mod error;
pub mod insert;
pub mod populator;
pub mod sink;

pub use args::{CommonPopulateArgs, MySQLPopulateArgs};
pub use error::MySQLPopulatorError;
pub use insert::{generate_create_table, generate_drop_table, insert_sql, table_name};
pub use populator::{
    build_generator, populate, populate_then_close, run_populate, PopulateMetrics,
    PROGRESS_INTERVAL,
};
pub use sink::{MySQLSink, RowSink};
