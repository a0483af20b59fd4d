//! PostgreSQL wire protocol sessions for setup scripts
//!
//! Sessions never open a transaction, so every batch commits as soon as it
//! completes (isolation level 0 / autocommit). DDL that refuses to run
//! inside a transaction block is therefore accepted.

use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection};
use tracing::debug;

use crate::scripts::{ConnectionParams, DatabaseError, SqlConnector, SqlSession};

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        DatabaseError(err.to_string())
    }
}

/// Opens one `sqlx` connection per script
#[derive(Debug, Default, Clone, Copy)]
pub struct PgConnector;

#[async_trait]
impl SqlConnector for PgConnector {
    async fn connect(
        &self,
        host: &str,
        params: &ConnectionParams,
    ) -> Result<Box<dyn SqlSession>, DatabaseError> {
        debug!(
            "Connecting to postgresql://{}@{}:{}/{}",
            params.user, host, params.port, params.database
        );
        let conn = PgConnection::connect(&params.url(host)).await?;
        Ok(Box::new(PgSession { conn }))
    }
}

struct PgSession {
    conn: PgConnection,
}

#[async_trait]
impl SqlSession for PgSession {
    async fn execute_batch(&mut self, sql: &str) -> Result<(), DatabaseError> {
        // Boxed executor future; `RawSql::execute` is not `Send` for all lifetimes
        let result = Executor::execute(&mut self.conn, sqlx::raw_sql(sql)).await?;
        debug!("Batch affected {} row(s)", result.rows_affected());
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), DatabaseError> {
        self.conn.close().await?;
        Ok(())
    }
}
