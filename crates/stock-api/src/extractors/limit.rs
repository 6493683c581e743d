//! Row limit extractor
//!
//! Reads `?limit=` leniently: a missing, non-numeric, or negative value falls
//! back to the route default, so the extractor never rejects a request.
//! `limit=0` is honored and yields no rows.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Largest limit any route will honor
pub const MAX_LIMIT: i64 = 1000;

/// Raw limit query parameter, kept as text so bad input never fails deserialization
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Row limit with a per-route default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit<const DEFAULT: i64 = 50>(pub i64);

impl<const DEFAULT: i64> Limit<DEFAULT> {
    /// Resolve a raw value against the route default
    pub fn resolve(raw: Option<&str>) -> Self {
        let limit = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .map_or(DEFAULT, |n| n.min(MAX_LIMIT));
        Self(limit)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl<const DEFAULT: i64> Default for Limit<DEFAULT> {
    fn default() -> Self {
        Self(DEFAULT)
    }
}

#[async_trait]
impl<S, const DEFAULT: i64> FromRequestParts<S> for Limit<DEFAULT>
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<LimitParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self::resolve(params.limit.as_deref()))
    }
}
