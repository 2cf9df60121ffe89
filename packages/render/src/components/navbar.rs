//! Fixed top navigation bar.

use city_safety_views::{NAV_LINKS, NavState};
use leptos::prelude::*;

/// Top navigation: brand, the four nav links, and the explore button.
#[component]
pub fn Navbar(
    /// Scroll chrome state; toggles the scrolled style.
    nav: NavState,
) -> impl IntoView {
    let class = if nav.scrolled {
        "navbar navbar-scrolled"
    } else {
        "navbar"
    };

    view! {
        <header>
            <div class=class>
                <a class="brand" href="/">
                    <div class="brand-mark">"NT"</div>
                    <h1 class="brand-name">
                        <span>"Nahj"</span>
                        <span class="yellow">"Tribunal"</span>
                    </h1>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! { <a class="nav-link" href=link.href>{link.label}</a> }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <a class="explore-btn" href="/explorer">"Explore"</a>
            </div>
        </header>
    }
}
