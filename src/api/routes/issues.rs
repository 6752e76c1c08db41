//! The set of all issues.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;

use crate::{
    api::{Json, Response},
    issue::Issue,
    AppState,
};

pub mod issue;

/// Lists every issue.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn get(State(state): State<AppState>) -> Response<Vec<Issue>> {
    let issues = sqlx::query_as::<_, Issue>(
        "SELECT id, title, description FROM issues
            ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok((StatusCode::OK, Json(issues)))
}
