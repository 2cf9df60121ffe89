//! One search hit rendered as a summary card.

use city_safety_crime_models::{BadgeColor, CrimeHit};
use leptos::prelude::*;

/// Renders one hit. Hits without a source document render nothing.
#[component]
pub fn CrimeCard(hit: CrimeHit) -> impl IntoView {
    let Some(src) = hit.source else {
        return view! {}.into_any();
    };

    let title = src.title().to_string();
    let badge = BadgeColor::for_type(&title);
    let badge_style = format!(
        "background:{};color:{}",
        badge.background(),
        badge.foreground()
    );

    view! {
        <div class="crime-card">
            <div class="crime-card-head">
                <span class="crime-card-title">{title.clone()}</span>
                <span class="badge" style=badge_style>{title}</span>
            </div>
            <div class="crime-card-desc">{src.description_text().to_string()}</div>
            <div class="crime-card-row">
                <div class="crime-card-item">
                    <span class="crime-card-label">"Date:"</span>
                    {src.date_text()}
                </div>
                <div class="crime-card-item">
                    <span class="crime-card-label">"Location:"</span>
                    {src.location_text().to_string()}
                </div>
                <div class="crime-card-item">
                    <span class="crime-card-label">"District:"</span>
                    {src.district_text()}
                </div>
            </div>
            <div class="crime-card-row">
                <div class="crime-card-item">
                    <span class="crime-card-label">"Type of Harm:"</span>
                    {src.victim_text().to_string()}
                </div>
                <div class="crime-card-item">
                    <span class="crime-card-label">"Arrest:"</span>
                    {src.arrest_status().label()}
                </div>
            </div>
        </div>
    }
    .into_any()
}
