//! Explorer page: filter form plus the result card grid.
//!
//! The form submits with `GET /explorer`, so every filter change issues
//! exactly one search on the resulting request.

use super::CrimeCard;
use city_safety_views::ExplorerState;
use leptos::prelude::*;

/// The explorer page for one state snapshot.
#[component]
pub fn ExplorerPage(state: ExplorerState) -> impl IntoView {
    let active = active_filters(&state);

    view! {
        <div class="explorer-container">
            <h1 class="explorer-title">"Crime " <span class="yellow">"Explorer"</span></h1>
            <p class="explorer-subtitle">"Search and explore crime incidents in Chicago"</p>

            <form class="filter-card" method="get" action="/explorer">
                <div class="search-row">
                    <input
                        type="text"
                        name="q"
                        class="input"
                        placeholder="Search for a crime (e.g., theft...)"
                        value=state.filters.q.clone()
                    />
                    <button type="submit" class="search-btn">"Search"</button>
                </div>
                <div class="filters-row">
                    <select name="primary_type" class="input">
                        <option value="">"All types"</option>
                        {state
                            .all_types
                            .iter()
                            .map(|t| {
                                let selected = *t == state.filters.primary_type;
                                view! {
                                    <option value=t.clone() selected=selected>{t.clone()}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select name="district" class="input">
                        <option value="">"All districts"</option>
                        {state
                            .all_districts
                            .iter()
                            .map(|d| {
                                let selected = *d == state.filters.district;
                                view! {
                                    <option value=d.clone() selected=selected>{d.clone()}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        type="date"
                        name="date_from"
                        class="input"
                        value=state.filters.date_from.clone()
                    />
                    <input
                        type="date"
                        name="date_to"
                        class="input"
                        value=state.filters.date_to.clone()
                    />
                </div>
                <div class="active-filters">
                    <span>"Active filters:"</span>
                    <span class="value">{active}</span>
                </div>
            </form>

            <p class="results-count">{format!("{} incidents found", state.total)}</p>

            <div class="results-list">
                {state
                    .hits
                    .iter()
                    .cloned()
                    .map(|hit| view! { <CrimeCard hit=hit /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn active_filters(state: &ExplorerState) -> String {
    if state.filters.is_empty() {
        return "No filters".to_string();
    }

    let filters = &state.filters;
    [
        ("q", &filters.q),
        ("type", &filters.primary_type),
        ("district", &filters.district),
        ("from", &filters.date_from),
        ("to", &filters.date_to),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!("{name}={value}"))
    .collect::<Vec<_>>()
    .join(", ")
}
