//! All routes for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{api, AppState};

pub mod add_issue;
pub mod issues;

/// Builds the API router, with each route's handlers sharing the specified state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/addissue", post(add_issue::post))
        .route("/issues", get(issues::get))
        .route(
            "/issues/:id",
            get(issues::issue::get)
                .put(issues::issue::put)
                .delete(issues::issue::delete),
        )
        .fallback(|| async { api::Error::RouteNotFound })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
