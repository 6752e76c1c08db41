//! The endpoint for creating new issues.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{
    api::{Json, Response},
    issue::Issue,
    AppState,
};

/// A `POST` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct PostRequest {
    /// The new issue's title.
    pub title: String,

    /// The new issue's description.
    pub description: String,
}

/// Creates a new issue, responding with the created issue including its assigned ID.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub async fn post(
    State(state): State<AppState>,
    Json(body): Json<PostRequest>,
) -> Response<Issue> {
    let issue = sqlx::query_as::<_, Issue>(
        "INSERT INTO issues (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description",
    )
    .bind(body.title)
    .bind(body.description)
    .fetch_one(&state.db_pool)
    .await?;

    tracing::debug!(id = %issue.id, "created issue");

    Ok((StatusCode::OK, Json(issue)))
}
