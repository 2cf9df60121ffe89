//! Document shell: head, navbar, main content, footer.

use super::{Footer, Navbar};
use crate::styles::APP_CSS;
use city_safety_views::NavState;
use leptos::prelude::*;

// Mirrors NavState::on_scroll for the live page; the server always renders
// the navbar unscrolled.
const SCROLL_SCRIPT: &str = r#"
window.addEventListener("scroll", function () {
  var bar = document.querySelector(".navbar");
  if (!bar) return;
  if (window.scrollY > 50) {
    bar.classList.add("navbar-scrolled");
  } else {
    bar.classList.remove("navbar-scrolled");
  }
});
"#;

/// The complete HTML document around a page body.
#[component]
pub fn PageShell(
    /// Document title.
    title: &'static str,
    /// Navbar chrome state.
    nav: NavState,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{APP_CSS}</style>
            </head>
            <body>
                <Navbar nav=nav />
                <main class="page-main">{children()}</main>
                <Footer />
                <script>{SCROLL_SCRIPT}</script>
            </body>
        </html>
    }
}
