#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point: web server by default, terminal explorer with
//! `--interactive`.

use clap::Parser;

/// Web and terminal frontend for the city safety crime explorer.
#[derive(Parser)]
#[command(name = "city_safety_server")]
struct Args {
    /// Run the interactive terminal explorer instead of the web server.
    #[arg(long)]
    interactive: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();
    if args.interactive {
        city_safety_server::interactive::run().await
    } else {
        city_safety_server::run_server().await
    }
}
