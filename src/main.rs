//! # E&P News Panel
//!
//! A terminal client for a news search service that scores headlines by
//! relevance to Brazilian oil & gas exploration and production. Each run is
//! one activation of the panel: one HTTP GET with the search window (and
//! optionally a method label) as query parameters, then the display is
//! rebuilt as one card per returned item, tier-coded by relevance.
//!
//! ## Usage
//!
//! ```sh
//! ep_news_panel -d 30 -m rss --html-out ./panel.html
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetch**: [`client::HttpNewsClient`] issues the GET, checks the HTTP
//!    status, and decodes the JSON body
//! 2. **Apply**: [`panel::NewsPanel`] rebuilds its view (status line plus
//!    ordered cards), dropping responses from superseded activations
//! 3. **Render**: [`render::text`] prints the view; [`render::html`] can
//!    additionally write it as an escaped standalone page

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod client;
mod error;
mod models;
mod panel;
mod render;

use cli::Cli;
use client::{HttpNewsClient, SearchQuery};
use error::PanelError;
use panel::{NewsPanel, SearchOutcome};
use render::{html, text};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args.days, ?args.method, ?args.html_out, "Parsed CLI arguments");

    // The endpoint is resolved once here and passed into the client; nothing
    // re-reads it per activation.
    let endpoint = Url::parse(&args.endpoint).map_err(PanelError::Endpoint)?;
    info!(%endpoint, "Panel endpoint configured");

    let panel = NewsPanel::new(HttpNewsClient::new(endpoint));
    let query = SearchQuery {
        days: args.days,
        method: args.method.clone(),
    };

    let outcome = panel.search(&query).await;
    let view = panel.view();
    print!("{}", text::render(&view));

    if let Some(path) = &args.html_out {
        tokio::fs::write(path, html::render_page(&view)).await?;
        info!(path = %path, "Wrote HTML panel");
    }

    let elapsed = start_time.elapsed();
    match outcome {
        SearchOutcome::Completed { count } => {
            info!(count, ?elapsed, "Execution complete");
            Ok(())
        }
        // Single-shot runs can't be superseded, but the match stays total.
        SearchOutcome::Superseded => Ok(()),
        SearchOutcome::Failed(e) => {
            error!(error = %e, ?elapsed, "Search failed");
            Err(e.into())
        }
    }
}
