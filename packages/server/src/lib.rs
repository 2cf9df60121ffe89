#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web frontend for the city safety explorer.
//!
//! Serves the server-side-rendered pages (`/`, `/explorer`, `/crime/{id}`,
//! `/analytics`) plus static assets. Every page handler drives its
//! view-state core against the external search service and renders the
//! resulting snapshot; the search service itself is an external
//! collaborator configured via `SEARCH_API_URL`.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use city_safety_api::SearchApi;

/// Shared application state.
pub struct AppState {
    /// Client for the external search service.
    pub api: SearchApi,
}

/// Starts the city safety web frontend.
///
/// Reads `SEARCH_API_URL`, `BIND_ADDR`, and `PORT` from the environment
/// and starts the Actix-Web HTTP server. This is a regular async function;
/// the caller provides the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let api = SearchApi::from_env();
    log::info!("Using search service at {}", api.base_url());

    let state = web::Data::new(AppState { api });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .route("/", web::get().to(handlers::home))
            .route("/explorer", web::get().to(handlers::explorer))
            .route("/crime/{id}", web::get().to(handlers::crime_detail))
            .route("/analytics", web::get().to(handlers::analytics))
            // Pre-rendered analytics exports and other static files
            .service(Files::new("/assets", "assets"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
