//! Axum extractors for request handling

mod limit;

pub use limit::{Limit, LimitParams, MAX_LIMIT};
