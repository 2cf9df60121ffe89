#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Client for the external search and aggregation service.
//!
//! The service exposes a small REST surface over the crime index:
//! `/api/search`, `/api/aggregations/summary`, `/api/count`,
//! `/api/mongo_summary`, and `/api/crime/{id}`. Responses are fetched as
//! raw JSON and parsed through free functions so the parsing paths stay
//! testable without a live service.
//!
//! Failures are never retried and never distinguished by transience; the
//! caller logs and degrades its UI region.

use city_safety_api_models::{
    AggregationsSummary, CountResponse, CrimeDetail, MongoSummary, SearchQuery, SearchResponse,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default service origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the service origin.
pub const BASE_URL_ENV: &str = "SEARCH_API_URL";

/// Errors from talking to the search service.
#[derive(Debug, Error)]
pub enum SearchApiError {
    /// The request failed or the service answered with a non-success
    /// status.
    #[error("Search service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 200 with a body that does not match the
    /// contract.
    #[error("Unexpected search service response: {message}")]
    Parse {
        /// Description of the mismatch.
        message: String,
    },
}

/// Client handle for the search service.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct SearchApi {
    client: reqwest::Client,
    base_url: String,
}

impl SearchApi {
    /// Creates a client for the given service origin.
    ///
    /// Trailing slashes on the origin are ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client from `SEARCH_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    /// The configured service origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/search` with the given filter parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SearchApiError`] if the request fails, the service answers
    /// with a non-success status, or the body does not parse.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchApiError> {
        let body = self
            .get_json("/api/search", &query.params())
            .await?;
        parse_search_response(&body)
    }

    /// `GET /api/aggregations/summary`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchApiError`] if the request fails or the body does not
    /// parse.
    pub async fn aggregations_summary(&self) -> Result<AggregationsSummary, SearchApiError> {
        let body = self.get_json("/api/aggregations/summary", &[]).await?;
        parse_aggregations_summary(&body)
    }

    /// `GET /api/count`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchApiError`] if the request fails or the count is not
    /// a number.
    pub async fn count(&self) -> Result<CountResponse, SearchApiError> {
        let body = self.get_json("/api/count", &[]).await?;
        parse_count(&body)
    }

    /// `GET /api/mongo_summary`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchApiError`] if the request fails or the body does not
    /// parse.
    pub async fn mongo_summary(&self) -> Result<MongoSummary, SearchApiError> {
        let body = self.get_json("/api/mongo_summary", &[]).await?;
        parse_mongo_summary(&body)
    }

    /// `GET /api/crime/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchApiError`] if the request fails, the id is unknown
    /// (the service answers 404), or the body does not parse.
    pub async fn crime(&self, id: &str) -> Result<CrimeDetail, SearchApiError> {
        let body = self
            .get_json(&format!("/api/crime/{id}"), &[])
            .await?;
        parse_crime_detail(&body)
    }

    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, SearchApiError> {
        let url = format!("{}{path}", self.base_url);
        log::debug!("GET {url} params={params:?}");

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Parses a `/api/search` body.
///
/// # Errors
///
/// Returns [`SearchApiError::Parse`] when the body does not match the
/// contract.
pub fn parse_search_response(body: &serde_json::Value) -> Result<SearchResponse, SearchApiError> {
    from_value(body, "search response")
}

/// Parses an `/api/aggregations/summary` body.
///
/// # Errors
///
/// Returns [`SearchApiError::Parse`] when the body does not match the
/// contract.
pub fn parse_aggregations_summary(
    body: &serde_json::Value,
) -> Result<AggregationsSummary, SearchApiError> {
    from_value(body, "aggregations summary")
}

/// Parses an `/api/count` body.
///
/// # Errors
///
/// Returns [`SearchApiError::Parse`] when the count is missing or not a
/// number.
pub fn parse_count(body: &serde_json::Value) -> Result<CountResponse, SearchApiError> {
    from_value(body, "count response")
}

/// Parses an `/api/mongo_summary` body.
///
/// # Errors
///
/// Returns [`SearchApiError::Parse`] when the body does not match the
/// contract.
pub fn parse_mongo_summary(body: &serde_json::Value) -> Result<MongoSummary, SearchApiError> {
    from_value(body, "mongo summary")
}

/// Parses an `/api/crime/{id}` body.
///
/// # Errors
///
/// Returns [`SearchApiError::Parse`] when the body does not match the
/// contract.
pub fn parse_crime_detail(body: &serde_json::Value) -> Result<CrimeDetail, SearchApiError> {
    from_value(body, "crime detail")
}

fn from_value<T: DeserializeOwned>(
    body: &serde_json::Value,
    context: &str,
) -> Result<T, SearchApiError> {
    serde_json::from_value(body.clone()).map_err(|e| SearchApiError::Parse {
        message: format!("{context}: {e}"),
    })
}
