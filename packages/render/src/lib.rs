#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Leptos SSR rendering for the city safety UI.
//!
//! Pure static HTML generation: every page is a function from view state
//! to a complete document string. No reactive runtime, no hydration. The
//! only client-side script is the cosmetic navbar scroll toggle.

pub mod components;
pub mod styles;

use city_safety_views::{ExplorerState, HomeState, NavState};
use components::{AnalyticsPage, ExplorerPage, HomeHero, PageShell};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Renders the landing page.
#[must_use]
pub fn render_home(state: &HomeState, nav: NavState) -> String {
    let state = *state;
    let html = view! {
        <PageShell title="Nahj Tribunal Monitor" nav=nav>
            <HomeHero state=state />
        </PageShell>
    }
    .to_html();
    with_doctype(&html)
}

/// Renders the explorer page for the given state snapshot.
#[must_use]
pub fn render_explorer(state: &ExplorerState, nav: NavState) -> String {
    let state = state.clone();
    let html = view! {
        <PageShell title="Crime Explorer" nav=nav>
            <ExplorerPage state=state />
        </PageShell>
    }
    .to_html();
    with_doctype(&html)
}

/// Renders the static analytics gallery.
#[must_use]
pub fn render_analytics(nav: NavState) -> String {
    let html = view! {
        <PageShell title="Analytics" nav=nav>
            <AnalyticsPage />
        </PageShell>
    }
    .to_html();
    with_doctype(&html)
}

// Leptos doesn't emit the DOCTYPE itself.
fn with_doctype(html: &str) -> String {
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_safety_views::{ExplorerEvent, FilterState};
    use pretty_assertions::assert_eq;

    #[test]
    fn home_renders_counters() {
        let state = HomeState {
            total_incidents: 812_342,
            total_districts: 23,
            total_types: 31,
        };
        let html = render_home(&state, NavState::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("812342"));
        assert!(html.contains("Incidents analyzed"));
        assert!(html.contains("id=\"features\""));
    }

    #[test]
    fn explorer_renders_zero_state() {
        let (state, _) = ExplorerState::init(FilterState::default());
        let html = render_explorer(&state, NavState::default());

        assert!(html.contains("0 incidents found"));
        assert!(!html.contains("crime-card\""));
    }

    #[test]
    fn explorer_renders_cards_for_hits() {
        let (mut state, _) = ExplorerState::init(FilterState::default());
        let seq = state.current_seq();
        let response = serde_json::from_value(serde_json::json!({
            "hits": [
                {
                    "id": "1",
                    "source": {
                        "primary_type": "BURGLARY",
                        "description": "FORCIBLE ENTRY",
                        "Arrest": "true",
                        "district": 5
                    }
                },
                { "id": "2", "source": { "primary_type": "THEFT", "arrest": false } }
            ],
            "total": 2
        }))
        .unwrap();
        state.update(ExplorerEvent::SearchLoaded { seq, response });

        let html = render_explorer(&state, NavState::default());
        assert!(html.contains("2 incidents found"));
        assert!(html.contains("BURGLARY"));
        // Burglary badge is blue; arrest flags normalize to Yes/No.
        assert!(html.contains("#3B82F6"));
        assert!(html.contains("Yes"));
        assert!(html.contains("No"));
    }

    #[test]
    fn analytics_renders_the_gallery() {
        let html = render_analytics(NavState::default());
        assert!(html.contains("Analytics Page"));
        assert_eq!(html.matches("<img").count(), 8);
    }
}
