//! Watch-list rules for tracked series.
//!
//! Status values are stored as free-form text. The four well-known values
//! below are what clients are expected to send, but the store accepts
//! anything; [`is_known_status`] only lets callers flag the odd ones.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_PLAN_TO_WATCH: &str = "PlanToWatch";
pub const STATUS_WATCHING: &str = "Watching";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_DROPPED: &str = "Dropped";

/// Conventional status values, in lifecycle order.
pub const KNOWN_STATUSES: &[&str] = &[
    STATUS_PLAN_TO_WATCH,
    STATUS_WATCHING,
    STATUS_COMPLETED,
    STATUS_DROPPED,
];

/// Check whether a status is one of the conventional values (exact match).
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Ordering of list results by ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse the `sort` query value.
    ///
    /// Only the exact literals `"asc"` and `"desc"` select an order; anything
    /// else (including an empty string) means "no ordering requested".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// List filter
// ---------------------------------------------------------------------------

/// Normalized criteria for listing series.
///
/// Every criterion is optional; an absent one does not restrict results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesFilter {
    /// Substring that must appear somewhere in the title.
    pub search: Option<String>,
    /// Exact status value.
    pub status: Option<String>,
    pub sort: Option<SortOrder>,
}

impl SeriesFilter {
    /// Build a filter from raw query values, treating empty strings as absent.
    pub fn from_params(search: Option<&str>, status: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            search: non_empty(search),
            status: non_empty(status),
            sort: sort.and_then(SortOrder::parse),
        }
    }

    /// True when the filter matches every row in storage-defined order.
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_none() && self.status.is_none() && self.sort.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Escape `LIKE` metacharacters so the text only ever matches literally.
///
/// The result must be used with `ESCAPE '\'`.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

/// A single ranking vote.
///
/// Lower rankings sort first, so an upvote moves the ranking down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingVote {
    Up,
    Down,
}

impl RankingVote {
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "upvote",
            Self::Down => "downvote",
        }
    }

    /// Ranking after this vote, or a validation error if it would leave the
    /// `i64` range.
    pub fn apply(self, ranking: i64) -> Result<i64, CoreError> {
        ranking.checked_add(self.delta()).ok_or_else(|| {
            CoreError::Validation(format!(
                "Ranking {ranking} cannot take another {}",
                self.label()
            ))
        })
    }
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

/// Episode number following `current`. No upper bound besides `i64`.
pub fn next_episode(current: i64) -> Result<i64, CoreError> {
    current.checked_add(1).ok_or_else(|| {
        CoreError::Validation(format!("Episode {current} cannot be incremented"))
    })
}

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Parse a path segment into a series id.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid series id '{raw}'")))
}
