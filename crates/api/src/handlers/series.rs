//! Handlers for the `/series` resource.
//!
//! Episode and vote endpoints read the row first so they can 404 and report
//! the new value, then apply the change as its own statement. The reported
//! value is `read + delta`; it is not re-read after the write.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use seriestrack_core::series::{is_known_status, next_episode, RankingVote};
use seriestrack_core::types::DbId;
use seriestrack_db::models::series::{CreateSeries, UpdateSeries, UpdateSeriesStatus};
use seriestrack_db::repositories::SeriesRepo;

use crate::error::AppResult;
use crate::extract::{SeriesId, ValidatedJson};
use crate::query::ListSeriesParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// Result of a status change.
#[derive(Debug, Serialize)]
pub struct StatusChange {
    pub id: DbId,
    pub status: String,
    pub message: String,
}

/// Result of an episode increment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeProgress {
    pub id: DbId,
    pub last_episode_watched: i64,
    pub message: String,
}

/// Result of a ranking vote.
#[derive(Debug, Serialize)]
pub struct RankingChange {
    pub id: DbId,
    pub ranking: i64,
    pub message: String,
}

fn warn_if_unknown_status(status: &str) {
    if !is_known_status(status) {
        tracing::warn!(status, "Accepting unconventional series status");
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/series
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSeries>,
) -> AppResult<impl IntoResponse> {
    warn_if_unknown_status(&input.status);
    let series = SeriesRepo::create(&state.pool, &input).await?;
    tracing::info!(series_id = series.id, title = %series.title, "Series created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: series })))
}

/// GET /api/series?search=&status=&sort=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListSeriesParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter();
    let series = SeriesRepo::list(&state.pool, &filter).await?;
    tracing::debug!(
        unrestricted = filter.is_unrestricted(),
        count = series.len(),
        "Listed series"
    );
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
) -> AppResult<impl IntoResponse> {
    let series = SeriesRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: series }))
}

/// PUT /api/series/{id}
///
/// Full replace of every mutable field.
pub async fn update(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
    ValidatedJson(input): ValidatedJson<UpdateSeries>,
) -> AppResult<impl IntoResponse> {
    warn_if_unknown_status(&input.status);
    let series = SeriesRepo::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse { data: series }))
}

/// DELETE /api/series/{id}
///
/// Returns 204 whether or not the series existed.
pub async fn delete(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
) -> AppResult<StatusCode> {
    let deleted = SeriesRepo::delete(&state.pool, id).await?;
    tracing::info!(series_id = id, deleted, "Series delete requested");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/series/{id}/status
///
/// Does not check that the series exists.
pub async fn update_status(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
    ValidatedJson(input): ValidatedJson<UpdateSeriesStatus>,
) -> AppResult<impl IntoResponse> {
    warn_if_unknown_status(&input.status);
    SeriesRepo::set_status(&state.pool, id, &input.status).await?;
    Ok(Json(DataResponse {
        data: StatusChange {
            id,
            message: format!("Status of series {id} set to '{}'", input.status),
            status: input.status,
        },
    }))
}

/// PATCH /api/series/{id}/episode
///
/// Advance the last watched episode by one. Refused at `i64::MAX`.
pub async fn increment_episode(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
) -> AppResult<impl IntoResponse> {
    let current = SeriesRepo::find_by_id(&state.pool, id).await?;
    let next = next_episode(current.last_episode_watched)?;
    SeriesRepo::set_episode(&state.pool, id, next).await?;
    Ok(Json(DataResponse {
        data: EpisodeProgress {
            id,
            last_episode_watched: next,
            message: format!("Last watched episode of series {id} set to {next}"),
        },
    }))
}

/// PATCH /api/series/{id}/upvote
pub async fn upvote(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
) -> AppResult<impl IntoResponse> {
    vote(&state, id, RankingVote::Up).await
}

/// PATCH /api/series/{id}/downvote
pub async fn downvote(
    State(state): State<AppState>,
    SeriesId(id): SeriesId,
) -> AppResult<impl IntoResponse> {
    vote(&state, id, RankingVote::Down).await
}

async fn vote(
    state: &AppState,
    id: DbId,
    direction: RankingVote,
) -> AppResult<Json<DataResponse<RankingChange>>> {
    let current = SeriesRepo::find_by_id(&state.pool, id).await?;
    let ranking = direction.apply(current.ranking)?;
    SeriesRepo::adjust_ranking(&state.pool, id, direction).await?;
    Ok(Json(DataResponse {
        data: RankingChange {
            id,
            ranking,
            message: format!("Ranking of series {id} moved to {ranking} ({})", direction.label()),
        },
    }))
}
