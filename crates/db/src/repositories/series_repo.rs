//! Repository for the `series` table.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use seriestrack_core::series::{escape_like, RankingVote, SeriesFilter};
use seriestrack_core::types::DbId;

use crate::error::RepoError;
use crate::models::series::{CreateSeries, Series, UpdateSeries};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status, last_episode_watched, total_episodes, ranking";

/// Provides CRUD and targeted mutations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row with its assigned id.
    pub async fn create(pool: &SqlitePool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series (title, status, last_episode_watched, total_episodes, ranking) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(input.last_episode_watched)
            .bind(input.total_episodes)
            .bind(input.ranking)
            .fetch_one(pool)
            .await
    }

    /// List series matching every criterion present in `filter`.
    ///
    /// Search is a literal substring match on the title, status is exact.
    /// Ties on ranking are broken by id; without a sort the order is whatever
    /// storage returns.
    pub async fn list(pool: &SqlitePool, filter: &SeriesFilter) -> Result<Vec<Series>, sqlx::Error> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM series WHERE 1=1"));

        if let Some(search) = &filter.search {
            builder
                .push(" AND title LIKE '%' || ")
                .push_bind(escape_like(search))
                .push(" || '%' ESCAPE '\\'");
        }

        if let Some(status) = &filter.status {
            builder.push(" AND status = ").push_bind(status.clone());
        }

        if let Some(sort) = filter.sort {
            builder
                .push(" ORDER BY ranking ")
                .push(sort.as_sql())
                .push(", id ASC");
        }

        builder.build_query_as::<Series>().fetch_all(pool).await
    }

    /// Fetch a single series by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Series, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = ?");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound { id })
    }

    /// Replace every mutable field of a series.
    ///
    /// Returns [`RepoError::NotFound`] when no row has this id, in which
    /// case nothing was written.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Series, RepoError> {
        let query = format!(
            "UPDATE series SET \
                title = ?, \
                status = ?, \
                last_episode_watched = ?, \
                total_episodes = ?, \
                ranking = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(input.last_episode_watched)
            .bind(input.total_episodes)
            .bind(input.ranking)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound { id })
    }

    /// Delete a series by id. Returns true if a row was deleted.
    ///
    /// Deleting a missing id is not an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set only the status. A missing id is silently ignored.
    pub async fn set_status(pool: &SqlitePool, id: DbId, status: &str) -> Result<(), sqlx::Error> {
        let result = sqlx::query("UPDATE series SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(series_id = id, status, rows = result.rows_affected(), "Series status set");
        Ok(())
    }

    /// Set the last watched episode to an absolute value. A missing id is
    /// silently ignored.
    pub async fn set_episode(pool: &SqlitePool, id: DbId, episode: i64) -> Result<(), sqlx::Error> {
        let result = sqlx::query("UPDATE series SET last_episode_watched = ? WHERE id = ?")
            .bind(episode)
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(series_id = id, episode, rows = result.rows_affected(), "Series episode set");
        Ok(())
    }

    /// Apply a vote as a relative update evaluated by the database.
    ///
    /// Concurrent votes on the same id all land; the ranking is never read
    /// back into the application before writing. A missing id is silently
    /// ignored. A vote that would push the ranking past the `i64` range is
    /// refused by the STRICT table and leaves the row unchanged.
    pub async fn adjust_ranking(
        pool: &SqlitePool,
        id: DbId,
        vote: RankingVote,
    ) -> Result<(), sqlx::Error> {
        let delta = vote.delta();
        let result = sqlx::query("UPDATE series SET ranking = ranking + ? WHERE id = ?")
            .bind(delta)
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(series_id = id, delta, rows = result.rows_affected(), "Series ranking adjusted");
        Ok(())
    }
}
