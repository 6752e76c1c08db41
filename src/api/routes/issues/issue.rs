//! A single issue, identified by its ID.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{
    api::{self, Json, Path, Response},
    issue::{Issue, IssueId},
    AppState,
};

/// The response body after an issue is deleted.
const DELETED_MESSAGE: &str = "Issue is deleted";

/// Gets an issue.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn get(State(state): State<AppState>, Path(id): Path<IssueId>) -> Response<Issue> {
    let Some(issue) = sqlx::query_as::<_, Issue>(
        "SELECT id, title, description FROM issues
            WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    else {
        return Err(api::Error::IssueNotFound);
    };

    Ok((StatusCode::OK, Json(issue)))
}

/// A `PUT` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PutRequest {
    /// The issue's new title, or `None` to keep its current title.
    #[serde(default)]
    pub title: Option<String>,

    /// The issue's new description.
    pub description: String,
}

/// Overwrites an existing issue's description, and its title if one is specified, responding with
/// the updated issue.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<IssueId>,
    Json(body): Json<PutRequest>,
) -> Response<Issue> {
    let Some(issue) = sqlx::query_as::<_, Issue>(
        "UPDATE issues
            SET title = COALESCE($1, title), description = $2
            WHERE id = $3
            RETURNING id, title, description",
    )
    .bind(body.title)
    .bind(body.description)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    else {
        return Err(api::Error::IssueNotFound);
    };

    tracing::debug!(%id, "updated issue");

    Ok((StatusCode::OK, Json(issue)))
}

/// Permanently deletes an issue.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<IssueId>,
) -> Response<&'static str> {
    let result = sqlx::query(
        "DELETE FROM issues
            WHERE id = $1",
    )
    .bind(id)
    .execute(&state.db_pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(api::Error::IssueNotFound);
    }

    tracing::debug!(%id, "deleted issue");

    Ok((StatusCode::OK, Json(DELETED_MESSAGE)))
}
