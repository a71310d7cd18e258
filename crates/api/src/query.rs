//! Query parameter types for API handlers.

use serde::Deserialize;
use seriestrack_core::series::SeriesFilter;

/// `GET /api/series?search=&status=&sort=`
///
/// Values are passed through untouched; empty strings and unknown sort
/// values are normalized away by [`SeriesFilter::from_params`].
#[derive(Debug, Default, Deserialize)]
pub struct ListSeriesParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

impl ListSeriesParams {
    pub fn to_filter(&self) -> SeriesFilter {
        SeriesFilter::from_params(
            self.search.as_deref(),
            self.status.as_deref(),
            self.sort.as_deref(),
        )
    }
}
