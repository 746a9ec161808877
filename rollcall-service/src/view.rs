// Browser view derivation
// Maps (records, query, loading flag) to what the result area shows

use crate::record::Record;
use crate::search::filter_records;

/// Most matches ever rendered at once. The results line still reports the
/// full count.
pub const DISPLAY_LIMIT: usize = 50;

/// Matches borrow the records (`'a`); only `NoMatches` borrows the query (`'q`).
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserView<'a, 'q> {
    /// The record asset has not settled yet
    Loading,
    /// Nothing typed yet
    Prompt,
    /// A query was typed but nothing matched
    NoMatches { query: &'q str },
    /// Matches found; `shown` holds at most `DISPLAY_LIMIT` of `total`
    Results {
        total: usize,
        shown: Vec<&'a Record>,
    },
}

impl<'a, 'q> BrowserView<'a, 'q> {
    pub fn derive(records: &'a [Record], query: &'q str, is_loading: bool) -> Self {
        if is_loading {
            return BrowserView::Loading;
        }
        if query.is_empty() {
            return BrowserView::Prompt;
        }

        let mut matches = filter_records(records, query);
        if matches.is_empty() {
            return BrowserView::NoMatches { query };
        }

        let total = matches.len();
        matches.truncate(DISPLAY_LIMIT);
        BrowserView::Results {
            total,
            shown: matches,
        }
    }

    /// Total number of matches, before truncation
    pub fn total_matches(&self) -> usize {
        match self {
            BrowserView::Results { total, .. } => *total,
            _ => 0,
        }
    }

    /// Matches that should actually be drawn
    pub fn shown(&self) -> &[&'a Record] {
        match self {
            BrowserView::Results { shown, .. } => shown,
            _ => &[],
        }
    }

    /// "Found N results" whenever a query has been evaluated
    pub fn results_line(&self) -> Option<String> {
        match self {
            BrowserView::Loading | BrowserView::Prompt => None,
            BrowserView::NoMatches { .. } => Some("Found 0 results".to_string()),
            BrowserView::Results { total, .. } => Some(format!("Found {} results", total)),
        }
    }
}
