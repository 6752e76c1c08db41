//! The HTTP API for managing issues.

pub mod routes;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use thiserror::Error;

pub use routes::router;

/// The generic message sent in place of internal error details.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// An API error. Each variant is sent to the client as a JSON string message along with its status
/// code.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No issue has the requested ID.
    #[error("Issue not found")]
    IssueNotFound,

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The request body was malformed or missing required fields.
    #[error("{0}")]
    InvalidBody(String),

    /// The request body wasn't declared as JSON.
    #[error("Expected request with `Content-Type: application/json`")]
    BodyNotJson,

    /// A request path parameter couldn't be parsed.
    #[error("{0}")]
    InvalidPath(String),

    /// A database query failed. The details are logged rather than sent.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// Gets the HTTP status code this error is sent with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::IssueNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::BodyNotJson => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Gets the message sent to the client in the response body.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) => INTERNAL_ERROR_MESSAGE.into(),
            error => error.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        if let Self::Database(error) = &self {
            tracing::error!(%error, "database query failed");
        }

        (self.status(), axum::Json(self.message())).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => Self::BodyNotJson,
            rejection => Self::InvalidBody(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

/// A JSON request or response body. Rejections are sent as an API [`Error`].
#[derive(FromRequest, Clone, Copy, Default, Debug)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameters of a request URI. Rejections are sent as an API [`Error`].
#[derive(FromRequestParts, Clone, Copy, Default, Debug)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// The response type of an API route handler.
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;
