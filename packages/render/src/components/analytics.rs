//! Static analytics gallery: pre-rendered Kibana chart exports.

use leptos::prelude::*;

/// The eight pre-rendered analytics images, served from `/assets`.
pub const ANALYTICS_IMAGES: [&str; 8] = [
    "/assets/analytics/heatmap.png",
    "/assets/analytics/pourcentage.png",
    "/assets/analytics/victim_type_breakdown.png",
    "/assets/analytics/map.png",
    "/assets/analytics/top_crimes.png",
    "/assets/analytics/blocks.png",
    "/assets/analytics/analysis.png",
    "/assets/analytics/courbe.png",
];

/// The analytics gallery page.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="analytics-container">
            <h1>"Analytics Page"</h1>
            <div class="analytics-grid">
                {ANALYTICS_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <div>
                                <img src=*src alt=format!("Analytics {}", index + 1) />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
