//! Leptos components for the city safety pages.
//!
//! Component hierarchy:
//!
//! ```text
//! PageShell
//! +-- Navbar
//! +-- main
//! |   +-- HomeHero | ExplorerPage | AnalyticsPage
//! |                     +-- CrimeCard (per hit)
//! +-- Footer
//! ```

mod analytics;
mod crime_card;
mod document;
mod explorer;
mod footer;
mod hero;
mod navbar;

pub use analytics::{ANALYTICS_IMAGES, AnalyticsPage};
pub use crime_card::CrimeCard;
pub use document::PageShell;
pub use explorer::ExplorerPage;
pub use footer::Footer;
pub use hero::HomeHero;
pub use navbar::Navbar;
