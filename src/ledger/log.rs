use serde::Serialize;
use tracing::{debug, info, warn};

use super::query::{filter, paginate, sort_descending};
use crate::error::LedgerResult;
use crate::models::Transaction;

/// Lifecycle of the transaction history as seen by the consuming screen.
///
/// `Loading` is entered once at startup. There is no refresh transition, so
/// once loaded the history stays fixed for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LogState {
    Loading,
    Ready,
    Filtering { term: String },
}

impl std::fmt::Display for LogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Ready => write!(f, "Ready"),
            Self::Filtering { term } => write!(f, "Filtering ({})", term),
        }
    }
}

/// One page of the (possibly filtered) history
#[derive(Debug, Clone, Serialize)]
pub struct TransactionPage {
    pub items: Vec<Transaction>,
    pub page: usize,
    pub page_size: i64,
    pub total_pages: usize,
    pub total_items: usize,  // Matches for the active term, not the whole log
    pub loading: bool,
}

/// In-memory transaction history for one session
pub struct TransactionLog {
    state: LogState,
    transactions: Vec<Transaction>, // Kept sorted most recent first
    current_page: usize,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            state: LogState::Loading,
            transactions: Vec::new(),
            current_page: 1,
        }
    }

    /// Complete the initial load. Only the first call has any effect.
    pub fn load(&mut self, transactions: Vec<Transaction>) -> bool {
        if self.state != LogState::Loading {
            warn!("Transaction history already loaded, ignoring reload of {} records", transactions.len());
            return false;
        }

        self.transactions = sort_descending(transactions);
        self.state = LogState::Ready;
        self.current_page = 1;
        info!("Transaction history ready with {} records", self.transactions.len());
        true
    }

    pub fn state(&self) -> &LogState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LogState::Loading
    }

    /// Active search term, if any
    pub fn search_term(&self) -> Option<&str> {
        match &self.state {
            LogState::Filtering { term } => Some(term.as_str()),
            _ => None,
        }
    }

    /// Apply a search term. A changed term moves back to page 1; an empty
    /// term returns to `Ready`. Ignored while the history is still loading.
    pub fn apply_search(&mut self, term: &str) {
        if self.is_loading() {
            debug!("Search term ignored while transaction history is loading");
            return;
        }
        if self.search_term().unwrap_or("") == term {
            return;
        }

        self.state = if term.is_empty() {
            LogState::Ready
        } else {
            LogState::Filtering { term: term.to_string() }
        };
        self.current_page = 1;
        debug!("Transaction history state: {}", self.state);
    }

    /// Select a page; out-of-range pages simply render empty
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Step forward one page, never past the last page of the current view
    pub fn next_page(&mut self, page_size: i64) -> LedgerResult<usize> {
        let total_pages = self.view(page_size)?.total_pages;
        self.current_page = clamp_page(self.current_page.saturating_add(1), total_pages);
        Ok(self.current_page)
    }

    /// Step back one page, never before page 1
    pub fn prev_page(&mut self, page_size: i64) -> LedgerResult<usize> {
        let total_pages = self.view(page_size)?.total_pages;
        self.current_page = clamp_page(self.current_page.saturating_sub(1), total_pages);
        Ok(self.current_page)
    }

    /// Filter, order and paginate the history for an explicit term and page
    pub fn query(&self, term: Option<&str>, page: usize, page_size: i64) -> LedgerResult<TransactionPage> {
        if self.is_loading() {
            // Validate even while loading so bad input is rejected consistently
            paginate::<Transaction>(&[], page, page_size)?;
            return Ok(TransactionPage {
                items: Vec::new(),
                page,
                page_size,
                total_pages: 0,
                total_items: 0,
                loading: true,
            });
        }

        let matches = sort_descending(filter(&self.transactions, term));
        let (items, total_pages) = paginate(&matches, page, page_size)?;

        Ok(TransactionPage {
            items,
            page,
            page_size,
            total_pages,
            total_items: matches.len(),
            loading: false,
        })
    }

    /// Current view: the active term on the selected page
    pub fn view(&self, page_size: i64) -> LedgerResult<TransactionPage> {
        self.query(self.search_term(), self.current_page, page_size)
    }
}

// An empty view still sits on page 1
fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}
