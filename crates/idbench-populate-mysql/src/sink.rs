//! Row sinks the populate loop writes into.

use crate::error::MySQLPopulatorError;
use crate::insert::{insert_params, insert_sql};
use async_trait::async_trait;
use idbench_generator::{IdKind, UserRow};
use mysql_async::{prelude::*, Conn, Statement};
use tracing::{debug, warn};

/// Destination for generated rows, one insert per call.
#[async_trait]
pub trait RowSink: Send {
    async fn insert(&mut self, row: &UserRow) -> Result<(), MySQLPopulatorError>;

    /// Release whatever the sink holds. Called once, after the last insert.
    async fn close(self) -> Result<(), MySQLPopulatorError>
    where
        Self: Sized;
}

/// A single MySQL connection holding the prepared INSERT for one table.
///
/// Call [`RowSink::close`] when done; it releases the statement and the
/// connection.
pub struct MySQLSink {
    conn: Conn,
    statement: Statement,
}

impl MySQLSink {
    /// Connect and prepare the INSERT for `kind`.
    ///
    /// The connection is closed again if preparing the statement fails.
    pub async fn connect(connection_string: &str, kind: IdKind) -> Result<Self, MySQLPopulatorError> {
        let mut conn = Conn::from_url(connection_string).await?;

        let sql = insert_sql(kind);
        debug!("Preparing statement: {}", sql);
        match conn.prep(sql.as_str()).await {
            Ok(statement) => Ok(Self { conn, statement }),
            Err(e) => {
                if let Err(close_err) = conn.disconnect().await {
                    warn!("Failed to disconnect after prepare error: {}", close_err);
                }
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl RowSink for MySQLSink {
    async fn insert(&mut self, row: &UserRow) -> Result<(), MySQLPopulatorError> {
        self.conn
            .exec_drop(&self.statement, insert_params(row))
            .await?;
        Ok(())
    }

    /// Close the prepared statement and disconnect.
    async fn close(self) -> Result<(), MySQLPopulatorError> {
        let Self {
            mut conn,
            statement,
        } = self;
        let closed = conn.close(statement).await;
        conn.disconnect().await?;
        closed?;
        Ok(())
    }
}
