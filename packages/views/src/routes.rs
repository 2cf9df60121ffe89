//! Client-visible routes and navigation chrome state.

use serde::{Deserialize, Serialize};

/// Scroll offset (px) past which the navbar switches to its scrolled
/// style.
const SCROLL_THRESHOLD: f64 = 50.0;

/// The application's routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Landing page.
    Home,
    /// Search/filter explorer.
    Explorer,
    /// Single-crime view; renders the explorer.
    CrimeDetail(String),
    /// Static analytics gallery.
    Analytics,
}

impl Route {
    /// Parses a URL path (without query string) into a route.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/explorer" => Some(Self::Explorer),
            "/analytics" => Some(Self::Analytics),
            other => other
                .strip_prefix("/crime/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::CrimeDetail(id.to_string())),
        }
    }

    /// The URL path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Explorer => "/explorer".to_string(),
            Self::CrimeDetail(id) => format!("/crime/{id}"),
            Self::Analytics => "/analytics".to_string(),
        }
    }
}

/// One navbar/footer navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub label: &'static str,
    /// Target href. The About entry is an anchor on the home page.
    pub href: &'static str,
}

/// The fixed navigation links, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Crime Explorer",
        href: "/explorer",
    },
    NavLink {
        label: "Analytics",
        href: "/analytics",
    },
    NavLink {
        label: "About Us",
        href: "/#features",
    },
];

/// Cosmetic navbar state: whether the page is scrolled past the
/// threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// True once the viewport has scrolled past the threshold.
    pub scrolled: bool,
}

impl NavState {
    /// Updates the flag from the current vertical scroll offset.
    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/explorer"), Some(Route::Explorer));
        assert_eq!(Route::parse("/analytics"), Some(Route::Analytics));
        assert_eq!(
            Route::parse("/crime/abc123"),
            Some(Route::CrimeDetail("abc123".to_string()))
        );
        assert_eq!(Route::parse("/crime/"), None);
        assert_eq!(Route::parse("/nope"), None);

        assert_eq!(Route::CrimeDetail("x".to_string()).path(), "/crime/x");
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn nav_links_cover_the_four_entries() {
        assert_eq!(NAV_LINKS.len(), 4);
        assert_eq!(NAV_LINKS[1].href, "/explorer");
        assert_eq!(NAV_LINKS[3].href, "/#features");
    }

    #[test]
    fn navbar_scroll_threshold() {
        let mut nav = NavState::default();
        nav.on_scroll(10.0);
        assert!(!nav.scrolled);
        nav.on_scroll(51.0);
        assert!(nav.scrolled);
        nav.on_scroll(0.0);
        assert!(!nav.scrolled);
    }
}
