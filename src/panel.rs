//! The panel controller.
//!
//! [`NewsPanel`] owns the display state (a status line plus an ordered list
//! of cards) and exposes a single operation, [`NewsPanel::search`]. Each
//! activation clears the cards, shows a searching message, awaits the fetcher,
//! and then either rebuilds the display from the result or rewrites only the
//! status line on failure.
//!
//! # Overlapping activations
//!
//! Activations may overlap; the network call is the only suspension point and
//! nothing stops a second press while the first is in flight. A generation
//! counter decides the winner: a response that resolves after a newer
//! activation has started is dropped without touching the view, so the display
//! always reflects the newest activation rather than whichever response
//! happened to resolve last.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info, instrument, warn};

use crate::client::{FetchNews, SearchQuery};
use crate::error::PanelError;
use crate::models::{NewsItem, RelevanceTier};

/// Status shown while a request is in flight.
pub const STATUS_SEARCHING: &str = "Buscando notícias...";

/// Status shown after any failure. All failure causes collapse into this one
/// message; the distinction lives in the logs.
pub const STATUS_FAILED: &str = "Erro ao buscar notícias.";

/// One rendered news item, classified at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub date: String,
    pub title: String,
    pub source: String,
    pub relevance: f64,
    pub link: String,
    pub tier: RelevanceTier,
}

impl From<NewsItem> for Card {
    fn from(item: NewsItem) -> Self {
        let tier = RelevanceTier::of(item.relevance);
        Self {
            date: item.date,
            title: item.title,
            source: item.source,
            relevance: item.relevance,
            link: item.link,
            tier,
        }
    }
}

/// The panel's display state: the status area plus the results container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelView {
    pub status: String,
    pub cards: Vec<Card>,
}

/// What happened to one activation.
#[derive(Debug)]
pub enum SearchOutcome {
    /// The display now shows this activation's cards.
    Completed { count: usize },
    /// The display shows the failure status; cards are whatever survived the
    /// initial clear.
    Failed(PanelError),
    /// A newer activation started while this one was in flight; its response
    /// was dropped and the display was left alone.
    Superseded,
}

/// UI controller bound to a fetcher. See the module docs for semantics.
pub struct NewsPanel<F> {
    fetcher: F,
    view: Mutex<PanelView>,
    generation: AtomicU64,
}

impl<F: FetchNews> NewsPanel<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            view: Mutex::new(PanelView::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// A snapshot of the current display state.
    pub fn view(&self) -> PanelView {
        self.view.lock().unwrap().clone()
    }

    /// Run one search activation against the panel.
    ///
    /// Clears the cards, shows [`STATUS_SEARCHING`], fetches, then applies the
    /// response, unless a newer activation started in the meantime, in which
    /// case the response is dropped. Failure rewrites only the status line to
    /// [`STATUS_FAILED`]; it never removes cards that were already appended.
    #[instrument(level = "info", skip_all, fields(days = query.days))]
    pub async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut view = self.view.lock().unwrap();
            view.cards.clear();
            view.status = STATUS_SEARCHING.to_string();
        }

        let fetched = self.fetcher.fetch(query).await;

        let mut view = self.view.lock().unwrap();
        if self.generation.load(Ordering::SeqCst) != generation {
            info!(generation, "Dropping response from superseded activation");
            return SearchOutcome::Superseded;
        }

        match fetched {
            Ok(result) => {
                if result.count as usize != result.items.len() {
                    warn!(
                        announced = result.count,
                        actual = result.items.len(),
                        "Item count does not match announced total"
                    );
                }
                view.status = result.summary_line();
                for item in result.items {
                    view.cards.push(Card::from(item));
                }
                let count = view.cards.len();
                info!(count, "Search completed");
                SearchOutcome::Completed { count }
            }
            Err(e) => {
                error!(error = %e, "Search failed");
                view.status = STATUS_FAILED.to_string();
                SearchOutcome::Failed(e)
            }
        }
    }
}
