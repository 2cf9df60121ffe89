//! HTTP handler functions for the rendered pages.
//!
//! Handlers never fail: fetch errors are logged and the affected region
//! renders in its empty/zero state. No user-visible error message, no
//! retry.

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use city_safety_api::SearchApi;
use city_safety_render::{render_analytics, render_explorer, render_home};
use city_safety_views::{
    Command, ExplorerEvent, ExplorerState, FilterState, HomeCommand, HomeEvent, HomeState,
    NavState,
};
use futures::future::join_all;

use crate::AppState;

/// `GET /`
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    let (mut home, commands) = HomeState::init();

    // The two counter fetches are independent; run them concurrently.
    let events = join_all(
        commands
            .into_iter()
            .map(|command| run_home_command(&state.api, command)),
    )
    .await;
    for event in events {
        home.update(event);
    }

    html(render_home(&home, NavState::default()))
}

/// `GET /explorer`
pub async fn explorer(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    explorer_page(&state.api, req.query_string()).await
}

/// `GET /crime/{id}`
///
/// Renders the explorer, matching the original route table where the
/// crime route is an alias of the explorer view.
pub async fn crime_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    _id: web::Path<String>,
) -> HttpResponse {
    explorer_page(&state.api, req.query_string()).await
}

/// `GET /analytics`
pub async fn analytics() -> HttpResponse {
    html(render_analytics(NavState::default()))
}

async fn explorer_page(api: &SearchApi, query_string: &str) -> HttpResponse {
    let filters = parse_filters(query_string);
    let (mut page, commands) = ExplorerState::init(filters);

    let events = join_all(
        commands
            .into_iter()
            .map(|command| run_explorer_command(api, command)),
    )
    .await;
    for event in events {
        page.update(event);
    }

    html(render_explorer(&page, NavState::default()))
}

/// Seeds the explorer filters from a request query string.
fn parse_filters(query_string: &str) -> FilterState {
    FilterState::from_query_pairs(
        url::form_urlencoded::parse(query_string.as_bytes()).into_owned(),
    )
}

/// Executes one explorer command against the search service.
pub(crate) async fn run_explorer_command(api: &SearchApi, command: Command) -> ExplorerEvent {
    match command {
        Command::Search { seq, query } => match api.search(&query).await {
            Ok(response) => ExplorerEvent::SearchLoaded { seq, response },
            Err(e) => {
                log::error!("Search request failed: {e}");
                ExplorerEvent::SearchFailed { seq }
            }
        },
        Command::LoadOptions => match api.aggregations_summary().await {
            Ok(summary) => ExplorerEvent::OptionsLoaded(summary),
            Err(e) => {
                log::error!("Failed to fetch filter options: {e}");
                ExplorerEvent::OptionsFailed
            }
        },
    }
}

/// Executes one home command against the search service.
pub(crate) async fn run_home_command(api: &SearchApi, command: HomeCommand) -> HomeEvent {
    match command {
        HomeCommand::LoadCount => match api.count().await {
            Ok(count) => HomeEvent::CountLoaded(count),
            Err(e) => {
                log::error!("Count fetch failed: {e}");
                HomeEvent::CountFailed
            }
        },
        HomeCommand::LoadSummary => match api.mongo_summary().await {
            Ok(summary) => HomeEvent::SummaryLoaded(summary),
            Err(e) => {
                log::error!("Summary fetch failed: {e}");
                HomeEvent::SummaryFailed
            }
        },
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filters_from_query_string() {
        let filters = parse_filters("q=theft&district=5&date_from=2023-01-01");
        assert_eq!(filters.q, "theft");
        assert_eq!(filters.district, "5");
        assert_eq!(filters.date_from, "2023-01-01");
        assert!(filters.primary_type.is_empty());
    }

    #[test]
    fn decodes_percent_encoding_and_plus() {
        let filters = parse_filters("q=armed+robbery&primary_type=MOTOR%20VEHICLE%20THEFT");
        assert_eq!(filters.q, "armed robbery");
        assert_eq!(filters.primary_type, "MOTOR VEHICLE THEFT");
    }

    #[test]
    fn empty_query_string_yields_default_filters() {
        assert_eq!(parse_filters(""), FilterState::default());
    }
}
