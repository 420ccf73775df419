//! Command-line interface definitions for the news panel.
//!
//! One invocation is one activation of the panel ("button press"). The
//! endpoint can come from the environment so deployments don't have to pass
//! it on every run.

use clap::Parser;

/// Command-line arguments for the panel binary.
///
/// # Examples
///
/// ```sh
/// # Search the last 7 days against the default local endpoint
/// ep_news_panel
///
/// # Wider window, explicit method, HTML output
/// ep_news_panel -d 30 -m rss --html-out ./panel.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news search endpoint
    #[arg(
        long,
        env = "NEWS_ENDPOINT",
        default_value = "http://127.0.0.1:8000/buscar-noticias"
    )]
    pub endpoint: String,

    /// Search window in days
    #[arg(short, long, default_value_t = 7)]
    pub days: i64,

    /// Search method label forwarded to the service
    #[arg(short, long)]
    pub method: Option<String>,

    /// Also write the panel as a standalone HTML page to this path
    #[arg(long)]
    pub html_out: Option<String>,
}
