//! Landing page: hero with counters and search handoff, features section,
//! technology cards.

use city_safety_views::HomeState;
use leptos::prelude::*;

const TECH_CARDS: [(&str, &str); 6] = [
    (
        "MongoDB",
        "Flexible and high-performance NoSQL database. Ideal for handling \
         large datasets quickly.",
    ),
    (
        "Elasticsearch",
        "Ultra-fast search and indexing engine. Perfect for analyzing \
         millions of records in real-time.",
    ),
    (
        "Kibana Visualizations",
        "Visualization tool connected to Elasticsearch. Allows creating \
         dashboards and analyzing crime trends.",
    ),
    (
        "FastAPI",
        "High-performance backend framework for building modern APIs. \
         Optimized for speed and simplicity.",
    ),
    (
        "Data Sources",
        "Data collected from multiple official platforms. Provides a \
         reliable foundation for crime analysis.",
    ),
    (
        "Advanced Search",
        "Feature to filter and explore crimes. Facilitates investigation \
         and extracting insights.",
    ),
];

/// The landing page body.
///
/// The search inputs hand off to `/explorer` via a plain GET form; the
/// landing page itself never calls the search endpoint.
#[component]
pub fn HomeHero(state: HomeState) -> impl IntoView {
    let stats = [
        ("Incidents analyzed", state.total_incidents),
        ("Districts covered", state.total_districts),
        ("Types of crime", state.total_types),
    ];

    view! {
        <div class="hero">
            <h1 class="hero-title">
                "Explore your city's " <span class="yellow">"safety"</span>
            </h1>
            <p class="hero-lead">
                "Explore and analyze crime data with our powerful interactive
                platform. Easily search, filter, and examine incidents across
                the city of Chicago, gaining valuable insights into public
                safety trends."
            </p>

            <form class="hero-search" method="get" action="/explorer">
                <input
                    type="text"
                    name="q"
                    class="hero-input"
                    placeholder="Search for an incident"
                />
                <input
                    type="text"
                    name="district"
                    class="hero-input"
                    placeholder="District..."
                />
                <button type="submit" class="hero-btn">"Search"</button>
            </form>

            <div class="hero-stats">
                {stats
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <h3 class="stat-value">{value.to_string()}</h3>
                                <p>{*label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>

        <div id="features" class="features">
            <h3 class="features-kicker">"Features"</h3>
            <h2>"A " <span class="yellow">"complete"</span> " platform"</h2>
            <p>
                "Our platform allows you to visualize, analyze, and filter
                crime data with advanced tools and clear visualizations."
            </p>
        </div>

        <div class="tech-grid">
            {TECH_CARDS
                .iter()
                .map(|(title, desc)| {
                    view! {
                        <div class="tech-card">
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
