//! Interactive terminal explorer.
//!
//! Drives the same view-state cores as the web handlers, with dialoguer
//! prompts as the event source: each filter edit feeds one event through
//! `update()` and executes the commands it returns against the search
//! service.

use city_safety_api::{DEFAULT_BASE_URL, SearchApi};
use city_safety_crime_models::BadgeColor;
use city_safety_views::{
    Command, ExplorerEvent, ExplorerState, FilterState, Handoff, HomeState,
};
use console::style;
use dialoguer::{Input, Select};
use futures::future::join_all;

use crate::handlers::{run_explorer_command, run_home_command};

const MENU: [&str; 8] = [
    "Edit text query",
    "Edit crime type",
    "Edit district",
    "Edit start date",
    "Edit end date",
    "Search again",
    "View crime details",
    "Quit",
];

/// Runs the terminal explorer until the user quits.
///
/// # Errors
///
/// Currently always returns `Ok`; the `std::io::Result` return mirrors the
/// web server entry point so `main` can dispatch to either.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("City Safety Explorer");
    println!();

    let base_url: String = Input::new()
        .with_prompt("Search service URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let api = SearchApi::new(base_url);

    show_home(&api).await;

    // Same handoff as the hero search bar: two inputs, then the explorer.
    let handoff = Handoff {
        incident: prompt("Search for an incident", ""),
        district: prompt("District", ""),
    };
    let filters = filters_from_path(&handoff.explorer_path());

    let (mut page, commands) = ExplorerState::init(filters);
    apply(&api, &mut page, commands).await;

    loop {
        print_results(&page);

        let choice = Select::new()
            .with_prompt("Explorer")
            .items(&MENU)
            .default(0)
            .interact()
            .unwrap_or(MENU.len() - 1);

        let event = match choice {
            0 => ExplorerEvent::QueryChanged(prompt("Text query", &page.filters.q)),
            1 => {
                if !page.all_types.is_empty() {
                    println!("Known types: {}", page.all_types.join(", "));
                }
                ExplorerEvent::TypeChanged(prompt("Crime type", &page.filters.primary_type))
            }
            2 => {
                if !page.all_districts.is_empty() {
                    println!("Known districts: {}", page.all_districts.join(", "));
                }
                ExplorerEvent::DistrictChanged(prompt("District", &page.filters.district))
            }
            3 => ExplorerEvent::DateFromChanged(prompt(
                "Start date (YYYY-MM-DD)",
                &page.filters.date_from,
            )),
            4 => ExplorerEvent::DateToChanged(prompt(
                "End date (YYYY-MM-DD)",
                &page.filters.date_to,
            )),
            5 => ExplorerEvent::SearchRequested,
            6 => {
                show_detail(&api).await;
                continue;
            }
            _ => break,
        };

        let commands = page.update(event);
        apply(&api, &mut page, commands).await;
    }

    Ok(())
}

async fn show_home(api: &SearchApi) {
    let (mut home, commands) = HomeState::init();
    let events = join_all(
        commands
            .into_iter()
            .map(|command| run_home_command(api, command)),
    )
    .await;
    for event in events {
        home.update(event);
    }

    println!(
        "{} incidents | {} districts | {} crime types",
        style(home.total_incidents).yellow().bold(),
        style(home.total_districts).yellow().bold(),
        style(home.total_types).yellow().bold(),
    );
    println!();
}

async fn apply(api: &SearchApi, page: &mut ExplorerState, commands: Vec<Command>) {
    let events = join_all(
        commands
            .into_iter()
            .map(|command| run_explorer_command(api, command)),
    )
    .await;
    for event in events {
        page.update(event);
    }
}

async fn show_detail(api: &SearchApi) {
    let id = prompt("Crime id", "");
    if id.is_empty() {
        return;
    }

    match api.crime(&id).await {
        Ok(detail) => {
            let Some(src) = detail.source else {
                println!("No source document for {id}");
                return;
            };
            println!("{}", style(src.title()).cyan().bold());
            println!("  Description: {}", src.description_text());
            println!("  Date:        {}", src.date_text());
            println!("  Location:    {}", src.location_text());
            println!("  District:    {}", src.district_text());
            println!("  Arrest:      {}", src.arrest_status().label());
            if let Some(severity) = src.severity_text() {
                println!("  Severity:    {severity}");
            }
        }
        Err(e) => log::error!("Crime lookup failed: {e}"),
    }
}

fn print_results(page: &ExplorerState) {
    println!();
    println!(
        "{} incidents found",
        style(page.total).yellow().bold()
    );
    for hit in &page.hits {
        let Some(src) = hit.source.as_ref() else {
            continue;
        };
        println!(
            "  {} {} | {} | district {} | arrest: {}",
            style(src.title()).cyan().bold(),
            style(format!("[{}]", BadgeColor::for_type(src.title()))).dim(),
            src.date_text(),
            src.district_text(),
            src.arrest_status().label(),
        );
        println!("      {}", src.description_text());
    }
    println!();
}

fn prompt(label: &str, current: &str) -> String {
    if current.is_empty() {
        Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .unwrap_or_default()
    } else {
        Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .default(current.to_string())
            .interact_text()
            .unwrap_or_else(|_| current.to_string())
    }
}

/// Parses explorer filters out of a handoff path such as
/// `/explorer?q=theft&district=5`.
fn filters_from_path(path: &str) -> FilterState {
    let query = path.split_once('?').map_or("", |(_, query)| query);
    FilterState::from_query_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handoff_path_round_trips_into_filters() {
        let handoff = Handoff {
            incident: "armed robbery".to_string(),
            district: "5".to_string(),
        };
        let filters = filters_from_path(&handoff.explorer_path());
        assert_eq!(filters.q, "armed robbery");
        assert_eq!(filters.district, "5");
    }

    #[test]
    fn bare_explorer_path_yields_default_filters() {
        assert_eq!(filters_from_path("/explorer"), FilterState::default());
    }
}
