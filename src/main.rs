//! # docsnip
//!
//! Renders search highlight snippets as bold/plain runs, builds search result
//! views, and orders assistant lists by the user's preferred order.
//!
//! ## Commands
//! - `highlight`: snippets with `<hi>` markup to styled text or JSON runs
//! - `documents`: search results with badges, relevance, and summaries
//! - `assistants` / `prefs`: preference-ordered assistant lists

mod cli;
mod core;
mod render;
mod run;

use clap::Parser;
use dotenv::dotenv;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Exit uses Display not Debug for a user-friendly message
    if let Err(e) = run::dispatch(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
