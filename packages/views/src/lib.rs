#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View-state cores for the city safety UI.
//!
//! Each page owns an explicit, serializable state struct driven by a
//! unidirectional `update(event) -> commands` function. The driver (web
//! handler or terminal loop) executes the returned commands against the
//! search service and feeds the outcomes back in as events. No state here
//! is tied to a rendering runtime.

pub mod explorer;
pub mod home;
pub mod routes;

pub use explorer::{Command, ExplorerEvent, ExplorerState, FilterState};
pub use home::{Handoff, HomeCommand, HomeEvent, HomeState};
pub use routes::{NAV_LINKS, NavLink, NavState, Route};
