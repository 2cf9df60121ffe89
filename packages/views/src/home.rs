//! Home page state: headline counters plus the explorer search handoff.

use city_safety_api_models::{CountResponse, MongoSummary};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::routes::Route;

/// Landing page counter state. All counters start at zero and only move
/// when a fetch delivers a well-shaped response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeState {
    /// Total incidents in the search index.
    pub total_incidents: u64,
    /// Number of districts covered.
    pub total_districts: u64,
    /// Number of distinct crime types.
    pub total_types: u64,
}

/// Events fed into [`HomeState::update`].
#[derive(Debug, Clone, Copy)]
pub enum HomeEvent {
    /// The incident count fetch completed.
    CountLoaded(CountResponse),
    /// The incident count fetch failed; the counter keeps its value.
    CountFailed,
    /// The types/districts summary fetch completed.
    SummaryLoaded(MongoSummary),
    /// The summary fetch failed; both counters keep their values.
    SummaryFailed,
}

/// Commands for the driver to execute on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCommand {
    /// Fetch `/api/count` and feed back `CountLoaded`/`CountFailed`.
    LoadCount,
    /// Fetch `/api/mongo_summary` and feed back
    /// `SummaryLoaded`/`SummaryFailed`.
    LoadSummary,
}

impl HomeState {
    /// Mount-time state and commands. The two fetches are independent; the
    /// driver may run them concurrently.
    #[must_use]
    pub fn init() -> (Self, Vec<HomeCommand>) {
        (
            Self::default(),
            vec![HomeCommand::LoadCount, HomeCommand::LoadSummary],
        )
    }

    /// Applies one fetch outcome.
    pub fn update(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::CountLoaded(count) => self.total_incidents = count.count,
            HomeEvent::SummaryLoaded(summary) => {
                self.total_types = summary.total_types;
                self.total_districts = summary.total_districts;
            }
            HomeEvent::CountFailed | HomeEvent::SummaryFailed => {}
        }
    }
}

/// The hero search handoff: two free-text inputs that navigate to the
/// explorer. The handoff never calls the search endpoint itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    /// Incident free-text input, becomes the explorer `q` parameter.
    pub incident: String,
    /// District input, becomes the explorer `district` parameter.
    pub district: String,
}

impl Handoff {
    /// Builds the explorer navigation target. Empty inputs are omitted
    /// from the query string.
    #[must_use]
    pub fn explorer_path(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.incident.is_empty() {
            serializer.append_pair("q", &self.incident);
        }
        if !self.district.is_empty() {
            serializer.append_pair("district", &self.district);
        }

        let base = Route::Explorer.path();
        let query = serializer.finish();
        if query.is_empty() {
            base
        } else {
            format!("{base}?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_apply_on_load() {
        let (mut state, commands) = HomeState::init();
        assert_eq!(
            commands,
            vec![HomeCommand::LoadCount, HomeCommand::LoadSummary]
        );
        assert_eq!(state.total_incidents, 0);

        state.update(HomeEvent::CountLoaded(CountResponse { count: 812_342 }));
        state.update(HomeEvent::SummaryLoaded(MongoSummary {
            total_types: 31,
            total_districts: 23,
        }));

        assert_eq!(state.total_incidents, 812_342);
        assert_eq!(state.total_types, 31);
        assert_eq!(state.total_districts, 23);
    }

    #[test]
    fn failures_keep_previous_values() {
        let (mut state, _) = HomeState::init();
        state.update(HomeEvent::CountLoaded(CountResponse { count: 10 }));

        state.update(HomeEvent::CountFailed);
        state.update(HomeEvent::SummaryFailed);

        assert_eq!(state.total_incidents, 10);
        assert_eq!(state.total_types, 0);
    }

    #[test]
    fn handoff_builds_explorer_path() {
        let both = Handoff {
            incident: "theft".to_string(),
            district: "5".to_string(),
        };
        assert_eq!(both.explorer_path(), "/explorer?q=theft&district=5");

        let incident_only = Handoff {
            incident: "armed robbery".to_string(),
            district: String::new(),
        };
        assert_eq!(incident_only.explorer_path(), "/explorer?q=armed+robbery");

        assert_eq!(Handoff::default().explorer_path(), "/explorer");
    }
}
