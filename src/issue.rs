//! The issue record, the only entity this service stores.

use derive_more::derive::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// An issue's unique identifier, assigned by the database when the issue is created.
#[derive(
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
    sqlx::Type,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct IssueId(i32);

/// An issue as stored in the `issues` table and as sent in response bodies.
#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Issue {
    /// The issue's ID. It never changes after creation.
    pub id: IssueId,

    /// The issue's title.
    pub title: String,

    /// The issue's description.
    pub description: String,
}
