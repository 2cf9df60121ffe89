//! Page footer: brand blurb, navigation, resources.

use city_safety_views::NAV_LINKS;
use leptos::prelude::*;

/// Static footer chrome.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-block">
                    <span class="footer-title">
                        "Nahj" <span class="yellow">"Tribunal"</span> " Monitor"
                    </span>
                    <p class="footer-text">
                        "Urban crime information and analysis tool. Data from Chicago
                        Open Data, stored in MongoDB, indexed via Elasticsearch and
                        visualized with Kibana."
                    </p>
                </div>
                <div class="footer-block">
                    <h4 class="footer-heading">"Navigation"</h4>
                    <ul class="footer-list">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li><a class="footer-link" href=link.href>{link.label}</a></li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="footer-block">
                    <h4 class="footer-heading">"Resources"</h4>
                    <ul class="footer-list">
                        <li>
                            <a
                                class="footer-link"
                                href="https://data.cityofchicago.org/"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Open Data Chicago"
                            </a>
                        </li>
                        <li><a class="footer-link" href="#">"API Documentation"</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>"© 2025 Nahj Tribunal Monitor. Educational project."</p>
                <p>"This site does not provide legal advice or emergency assistance."</p>
            </div>
        </footer>
    }
}
