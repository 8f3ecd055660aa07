//! Command-line definitions.

use clap::{Parser, Subcommand};
use idbench_generator::IdKind;
use idbench_populate_mysql::MySQLPopulateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "idbench")]
#[command(about = "Bulk-insert UUID, Snowflake or ULID keys into MySQL")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert generated rows into the table for the selected mode
    Insert {
        #[command(flatten)]
        args: MySQLPopulateArgs,
    },

    /// Print the CREATE TABLE statements the insert command expects
    Schema {
        /// Only print the table for this mode (default: all three)
        #[arg(long)]
        mode: Option<IdKind>,

        /// Prefix each CREATE TABLE with a DROP TABLE IF EXISTS
        #[arg(long)]
        drop: bool,

        /// Write the DDL to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
