//! Explorer page state: five filter fields synchronized to search results.
//!
//! The contract: whenever any filter field changes (including the initial
//! mount), exactly one search command is issued carrying a snapshot of all
//! fields. Completions are tagged with a monotonic sequence number and a
//! completion is applied only while its search is still the most recently
//! issued one, so a slow early request can never overwrite the results of
//! a fast later one.

use city_safety_api_models::{AggregationsSummary, SearchQuery, SearchResponse};
use city_safety_crime_models::CrimeHit;
use serde::{Deserialize, Serialize};

/// The five explorer filter fields. Empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text query.
    pub q: String,
    /// Crime type filter.
    pub primary_type: String,
    /// District filter.
    pub district: String,
    /// Start date, `YYYY-MM-DD`.
    pub date_from: String,
    /// End date, `YYYY-MM-DD`.
    pub date_to: String,
}

impl FilterState {
    /// Seeds filters from URL query pairs, e.g. at explorer mount.
    ///
    /// Unknown keys are ignored; repeated keys keep the last value.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => filters.q = value,
                "primary_type" => filters.primary_type = value,
                "district" => filters.district = value,
                "date_from" => filters.date_from = value,
                "date_to" => filters.date_to = value,
                _ => {}
            }
        }
        filters
    }

    /// Builds the outgoing search query from the current snapshot.
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            q: Some(self.q.clone()),
            primary_type: Some(self.primary_type.clone()),
            district: Some(self.district.clone()),
            date_from: Some(self.date_from.clone()),
            date_to: Some(self.date_to.clone()),
            ..SearchQuery::default()
        }
    }

    /// True when no filter field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
            && self.primary_type.is_empty()
            && self.district.is_empty()
            && self.date_from.is_empty()
            && self.date_to.is_empty()
    }
}

/// Explorer page state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerState {
    /// Current filter snapshot.
    pub filters: FilterState,
    /// Hits of the most recently applied search response.
    pub hits: Vec<CrimeHit>,
    /// Total of the most recently applied search response.
    pub total: u64,
    /// Type dropdown options.
    pub all_types: Vec<String>,
    /// District dropdown options.
    pub all_districts: Vec<String>,
    /// Sequence number of the most recently issued search.
    current_seq: u64,
}

/// Events fed into [`ExplorerState::update`].
#[derive(Debug, Clone)]
pub enum ExplorerEvent {
    /// The free-text query changed.
    QueryChanged(String),
    /// The crime type filter changed.
    TypeChanged(String),
    /// The district filter changed.
    DistrictChanged(String),
    /// The start date changed.
    DateFromChanged(String),
    /// The end date changed.
    DateToChanged(String),
    /// An explicit re-search was requested without changing any filter.
    SearchRequested,
    /// A search completed successfully.
    SearchLoaded {
        /// Sequence number the search was issued with.
        seq: u64,
        /// The response body.
        response: SearchResponse,
    },
    /// A search failed (network error or non-success status).
    SearchFailed {
        /// Sequence number the search was issued with.
        seq: u64,
    },
    /// The dropdown option lists loaded.
    OptionsLoaded(AggregationsSummary),
    /// The dropdown option fetch failed; the lists stay empty.
    OptionsFailed,
}

/// Commands for the driver to execute against the search service.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Issue `GET /api/search` and feed back `SearchLoaded`/`SearchFailed`
    /// with the same `seq`.
    Search {
        /// Sequence number identifying this request.
        seq: u64,
        /// Query snapshot to send.
        query: SearchQuery,
    },
    /// Fetch the aggregation summary and feed back
    /// `OptionsLoaded`/`OptionsFailed`.
    LoadOptions,
}

impl ExplorerState {
    /// Builds the mount-time state and commands: one option fetch plus one
    /// search reflecting the seeded filters.
    #[must_use]
    pub fn init(filters: FilterState) -> (Self, Vec<Command>) {
        let mut state = Self {
            filters,
            ..Self::default()
        };
        let mut commands = vec![Command::LoadOptions];
        commands.extend(state.issue_search());
        (state, commands)
    }

    /// Applies one event and returns the commands it triggers.
    pub fn update(&mut self, event: ExplorerEvent) -> Vec<Command> {
        match event {
            ExplorerEvent::QueryChanged(value) => {
                self.filters.q = value;
                self.issue_search()
            }
            ExplorerEvent::TypeChanged(value) => {
                self.filters.primary_type = value;
                self.issue_search()
            }
            ExplorerEvent::DistrictChanged(value) => {
                self.filters.district = value;
                self.issue_search()
            }
            ExplorerEvent::DateFromChanged(value) => {
                self.filters.date_from = value;
                self.issue_search()
            }
            ExplorerEvent::DateToChanged(value) => {
                self.filters.date_to = value;
                self.issue_search()
            }
            ExplorerEvent::SearchRequested => self.issue_search(),
            ExplorerEvent::SearchLoaded { seq, response } => {
                if seq == self.current_seq {
                    self.hits = response.hits;
                    self.total = response.total;
                } else {
                    log::debug!(
                        "discarding stale search response (seq {seq}, current {})",
                        self.current_seq
                    );
                }
                Vec::new()
            }
            ExplorerEvent::SearchFailed { seq } => {
                if seq == self.current_seq {
                    self.hits.clear();
                    self.total = 0;
                } else {
                    log::debug!(
                        "ignoring stale search failure (seq {seq}, current {})",
                        self.current_seq
                    );
                }
                Vec::new()
            }
            ExplorerEvent::OptionsLoaded(summary) => {
                self.all_types = summary.type_keys();
                self.all_districts = summary.district_keys();
                Vec::new()
            }
            ExplorerEvent::OptionsFailed => Vec::new(),
        }
    }

    /// Sequence number of the most recently issued search.
    #[must_use]
    pub const fn current_seq(&self) -> u64 {
        self.current_seq
    }

    fn issue_search(&mut self) -> Vec<Command> {
        self.current_seq += 1;
        vec![Command::Search {
            seq: self.current_seq,
            query: self.filters.to_query(),
        }]
    }
}
