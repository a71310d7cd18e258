use seriestrack_core::types::DbId;

/// Failure of a repository call that can also report a missing row.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Series with id {id} not found")]
    NotFound { id: DbId },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}
