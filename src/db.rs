//! General database handling.

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

/// Initializes the SQLx database pool and runs pending database migrations, returning the pool once
/// complete.
///
/// # Errors
///
/// Returns an error if the initial database connection or its migrations fail.
pub async fn initialize(config: &Config) -> sqlx::Result<PgPool> {
    let pool = pool_options(config).connect(&config.database_url).await?;

    tracing::info!("Migrating database...");

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Creates a database pool without connecting to the database until a connection is first needed.
///
/// # Errors
///
/// Returns an error if the database URL can't be parsed.
pub fn initialize_lazy(config: &Config) -> sqlx::Result<PgPool> {
    pool_options(config).connect_lazy(&config.database_url)
}

/// The pool options shared by every way of creating the pool.
fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}
