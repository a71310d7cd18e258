//! Domain types shared by the repository and HTTP layers.
//!
//! Nothing in here touches storage or HTTP, so the rules for filtering,
//! sorting, voting and id parsing can be unit tested in isolation.

pub mod error;
pub mod series;
pub mod types;
