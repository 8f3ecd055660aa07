//! Handlers for the `insert` and `schema` commands.

pub mod logging;
pub mod run;

pub use logging::mask_connection_password;
pub use run::{render_schema, run_insert, run_schema};
