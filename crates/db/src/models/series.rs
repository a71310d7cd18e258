//! Series entity model and DTOs.
//!
//! Field names are camelCase on the wire and snake_case in the table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use seriestrack_core::types::DbId;
use validator::Validate;

/// A row from the `series` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: DbId,
    pub title: String,
    pub status: String,
    pub last_episode_watched: i64,
    pub total_episodes: i64,
    pub ranking: i64,
}

/// DTO for creating a new series. The id is assigned by storage.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeries {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub last_episode_watched: i64,
    #[serde(default)]
    pub total_episodes: i64,
    #[serde(default)]
    pub ranking: i64,
}

/// DTO for a full replace of every mutable field.
///
/// Any `id` present in the body is ignored; the path id wins.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeries {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub last_episode_watched: i64,
    #[serde(default)]
    pub total_episodes: i64,
    #[serde(default)]
    pub ranking: i64,
}

/// DTO for changing only the status. Any string is accepted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSeriesStatus {
    pub status: String,
}
