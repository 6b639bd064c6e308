use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;
use crate::error::StoreError;

/// Failures while opening the store handle
#[derive(Error, Debug)]
pub enum DbError {
    #[error(transparent)]
    Config(#[from] retail_common::CommonError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Store(err.into())
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Open a connection pool and confirm the server answers.
pub async fn connect(config: &DatabaseConfig) -> DbResult<PgPool> {
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await?;

    if let Err(err) = health_check(&pool).await {
        pool.close().await;
        return Err(err);
    }

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

pub async fn health_check(pool: &PgPool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}
