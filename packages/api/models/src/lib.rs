#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response types for the search service REST API.
//!
//! These types mirror the JSON contract of the external search and
//! aggregation service (`/api/search`, `/api/aggregations/summary`,
//! `/api/count`, `/api/mongo_summary`, `/api/crime/{id}`). They are kept
//! separate from the domain types so the API contract can evolve
//! independently of the card presentation.

use city_safety_crime_models::{CrimeHit, CrimeSource};
use serde::{Deserialize, Serialize};

/// Parameters for `GET /api/search`.
///
/// Fields left as `None` (or empty strings) are omitted from the outgoing
/// request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query across type, description, and location.
    pub q: Option<String>,
    /// Exact primary type filter; lower-cased before sending.
    pub primary_type: Option<String>,
    /// District filter; coerced to an integer before sending.
    pub district: Option<String>,
    /// Inclusive start date, `YYYY-MM-DD`, passed through unvalidated.
    pub date_from: Option<String>,
    /// Inclusive end date, `YYYY-MM-DD`, passed through unvalidated.
    pub date_to: Option<String>,
    /// Page size; the service default applies when unset.
    pub size: Option<u32>,
    /// Zero-based page index.
    pub page: Option<u32>,
}

impl SearchQuery {
    /// Builds the outgoing query pairs.
    ///
    /// Empty fields are omitted, the primary type is lower-cased, and the
    /// district is coerced to an integer. A district that does not parse as
    /// an integer is dropped from the request. Dates pass through verbatim.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(q) = non_empty(self.q.as_deref()) {
            params.push(("q", q.to_string()));
        }
        if let Some(primary_type) = non_empty(self.primary_type.as_deref()) {
            params.push(("primary_type", primary_type.to_lowercase()));
        }
        if let Some(district) = non_empty(self.district.as_deref()) {
            if let Ok(district) = district.trim().parse::<i64>() {
                params.push(("district", district.to_string()));
            } else {
                log::debug!("dropping non-numeric district filter: {district:?}");
            }
        }
        if let Some(date_from) = non_empty(self.date_from.as_deref()) {
            params.push(("date_from", date_from.to_string()));
        }
        if let Some(date_to) = non_empty(self.date_to.as_deref()) {
            params.push(("date_to", date_to.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }

        params
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Response body of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching hits in relevance order.
    #[serde(default)]
    pub hits: Vec<CrimeHit>,
    /// Total number of matches, independent of paging.
    #[serde(default)]
    pub total: u64,
}

/// Response body of `GET /api/aggregations/summary`.
///
/// Only the bucket keys are consumed; they feed the explorer dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationsSummary {
    /// Aggregation over primary crime types.
    pub by_type: Option<BucketList>,
    /// Aggregation whose bucket keys populate the district dropdown.
    pub by_hour: Option<BucketList>,
}

impl AggregationsSummary {
    /// Bucket keys of the type aggregation, empty when the section is
    /// missing.
    #[must_use]
    pub fn type_keys(&self) -> Vec<String> {
        Self::keys(self.by_type.as_ref())
    }

    /// Bucket keys of the district aggregation, empty when the section is
    /// missing.
    #[must_use]
    pub fn district_keys(&self) -> Vec<String> {
        Self::keys(self.by_hour.as_ref())
    }

    fn keys(list: Option<&BucketList>) -> Vec<String> {
        list.map(|l| l.buckets.iter().map(|b| b.key.to_string()).collect())
            .unwrap_or_default()
    }
}

/// A list of aggregation buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketList {
    /// The buckets, in service order.
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// A single aggregation bucket. Only the key is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket key; a string for term aggregations, a number for histogram
    /// aggregations.
    pub key: BucketKey,
}

/// Bucket key as found on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketKey {
    /// Term aggregation key.
    Text(String),
    /// Histogram aggregation key.
    Number(i64),
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Response body of `GET /api/count`.
///
/// The count must be a JSON number; anything else fails deserialization and
/// the caller keeps its previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Total number of indexed incidents.
    pub count: u64,
}

/// Response body of `GET /api/mongo_summary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MongoSummary {
    /// Number of distinct crime types.
    pub total_types: u64,
    /// Number of distinct districts.
    pub total_districts: u64,
}

/// Response body of `GET /api/crime/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrimeDetail {
    /// Document id.
    pub id: String,
    /// The source document.
    #[serde(default)]
    pub source: Option<CrimeSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_sends_no_params() {
        assert!(SearchQuery::default().params().is_empty());

        let blank = SearchQuery {
            q: Some(String::new()),
            primary_type: Some(String::new()),
            district: Some(String::new()),
            date_from: Some(String::new()),
            date_to: Some(String::new()),
            ..SearchQuery::default()
        };
        assert!(blank.params().is_empty());
    }

    #[test]
    fn primary_type_is_lowercased() {
        let query = SearchQuery {
            primary_type: Some("Theft".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(query.params(), vec![("primary_type", "theft".to_string())]);
    }

    #[test]
    fn district_is_coerced_to_integer() {
        let query = SearchQuery {
            district: Some("5".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(query.params(), vec![("district", "5".to_string())]);

        let padded = SearchQuery {
            district: Some(" 012 ".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(padded.params(), vec![("district", "12".to_string())]);
    }

    #[test]
    fn non_numeric_district_is_dropped() {
        let query = SearchQuery {
            q: Some("theft".to_string()),
            district: Some("downtown".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(query.params(), vec![("q", "theft".to_string())]);
    }

    #[test]
    fn dates_pass_through_verbatim() {
        let query = SearchQuery {
            date_from: Some("2023-01-01".to_string()),
            date_to: Some("not-a-date".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(
            query.params(),
            vec![
                ("date_from", "2023-01-01".to_string()),
                ("date_to", "not-a-date".to_string()),
            ]
        );
    }

    #[test]
    fn paging_params_serialize_when_set() {
        let query = SearchQuery {
            size: Some(50),
            page: Some(2),
            ..SearchQuery::default()
        };
        assert_eq!(
            query.params(),
            vec![("size", "50".to_string()), ("page", "2".to_string())]
        );
    }

    #[test]
    fn search_response_parses_hits() {
        let response: SearchResponse = serde_json::from_value(serde_json::json!({
            "hits": [
                { "id": "1", "source": { "primary_type": "THEFT", "Arrest": "true" } },
                { "id": "2", "source": { "primary_type": "BATTERY", "arrest": false } }
            ],
            "total": 2
        }))
        .unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.hits.len(), 2);
        assert_eq!(
            response.hits[0].source.as_ref().unwrap().title(),
            "THEFT"
        );
    }

    #[test]
    fn aggregation_keys_accept_strings_and_numbers() {
        let summary: AggregationsSummary = serde_json::from_value(serde_json::json!({
            "by_type": { "buckets": [{ "key": "THEFT" }, { "key": "BATTERY" }] },
            "by_hour": { "buckets": [{ "key": 1 }, { "key": 12 }] }
        }))
        .unwrap();

        assert_eq!(summary.type_keys(), vec!["THEFT", "BATTERY"]);
        assert_eq!(summary.district_keys(), vec!["1", "12"]);
    }

    #[test]
    fn missing_aggregation_sections_yield_empty_lists() {
        let summary: AggregationsSummary =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(summary.type_keys().is_empty());
        assert!(summary.district_keys().is_empty());
    }

    #[test]
    fn count_requires_a_number() {
        let ok: CountResponse =
            serde_json::from_value(serde_json::json!({ "count": 812_342 })).unwrap();
        assert_eq!(ok.count, 812_342);

        let bad: Result<CountResponse, _> =
            serde_json::from_value(serde_json::json!({ "count": "many" }));
        assert!(bad.is_err());
    }

    #[test]
    fn mongo_summary_defaults_missing_fields_to_zero() {
        let summary: MongoSummary =
            serde_json::from_value(serde_json::json!({ "totalTypes": 31 })).unwrap();
        assert_eq!(summary.total_types, 31);
        assert_eq!(summary.total_districts, 0);
    }
}
