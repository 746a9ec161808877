use crate::config::TuiConfig;
use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::sync::Arc;

use rollcall_service::{BrowserView, LoadResult, Record, RecordSource};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info};

/// Rows (table) or cards moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub config: TuiConfig,
    pub records: Vec<Record>,
    pub query: String,
    pub is_loading: bool,
    pub scroll: usize,
    pub should_quit: bool,
    load_receiver: Option<oneshot::Receiver<LoadResult<Vec<Record>>>>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            query: String::new(),
            is_loading: true,
            scroll: 0,
            should_quit: false,
            load_receiver: None,
        }
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;

            // Settle the record load once it arrives
            self.poll_load();
        }
        Ok(())
    }

    // =========================================================================
    // Record Loading
    // =========================================================================

    /// Start the one-shot load. There is no timeout: if the source never
    /// answers the view keeps showing the loading indicator.
    pub fn start_load(&mut self, source: Arc<dyn RecordSource>) {
        let (tx, rx) = oneshot::channel();
        info!(source = %source.describe(), "loading records");
        tokio::spawn(async move {
            let outcome = source.load().await;
            let _ = tx.send(outcome);
        });
        self.load_receiver = Some(rx);
    }

    pub fn poll_load(&mut self) {
        let Some(receiver) = self.load_receiver.as_mut() else {
            return;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.load_receiver = None;
                self.apply_load(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.load_receiver = None;
                error!("record load ended without a result");
                self.is_loading = false;
            }
        }
    }

    /// A failed load is logged and leaves the record set empty; the user only
    /// ever sees "no results".
    pub fn apply_load(&mut self, outcome: LoadResult<Vec<Record>>) {
        match outcome {
            Ok(records) => {
                info!(count = records.len(), "records loaded");
                self.records = records;
            }
            Err(e) => {
                error!(error = %e, "failed to load records");
            }
        }
        self.is_loading = false;
        self.clamp_scroll();
    }

    // =========================================================================
    // Query Editing
    // =========================================================================

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.query_changed();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.query_changed();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.query_changed();
        }
    }

    fn query_changed(&mut self) {
        self.scroll = 0;
        debug!(query = %self.query, "query changed");
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll += 1;
        self.clamp_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.scroll += PAGE_SIZE;
        self.clamp_scroll();
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    fn clamp_scroll(&mut self) {
        let max = self.view().shown().len().saturating_sub(1);
        self.scroll = self.scroll.min(max);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// What the result area currently shows
    pub fn view(&self) -> BrowserView<'_, '_> {
        BrowserView::derive(&self.records, &self.query, self.is_loading)
    }
}
