//! Error types for the MySQL populator.

use idbench_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur during MySQL population.
#[derive(Error, Debug)]
pub enum MySQLPopulatorError {
    /// MySQL connection, prepare or insert error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}
