//! A minimal REST API for creating, reading, updating, and deleting issues stored in PostgreSQL.

pub mod api;
pub mod config;
pub mod db;
pub mod issue;

use sqlx::PgPool;

/// The state shared by all API route handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The SQLx database pool.
    pub db_pool: PgPool,
}
