use crate::application::dto::{FeedRequest, FeedResponse};
use crate::neo_tracking::domain::{DateGroup, FeedLimits, FeedWindow, FilterOptions, NeoRecord};
use crate::neo_tracking::policies::PaginationPolicy;
use crate::neo_tracking::services::NeoGrouper;
use crate::ports::outbound::{NeoFeedRepository, ProgressReporter};
use crate::shared::Result;
use chrono::NaiveDate;

/// Result of a "load more" attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// A page was fetched and appended; carries its record count
    Loaded(usize),
    /// The next window would pass the feed horizon; nothing was fetched
    Exhausted,
    /// Nothing loaded yet, a request is in flight, or paging already stopped
    Skipped,
}

/// BrowseFeedUseCase - stateful feed session
///
/// Holds the accumulated record list plus loading/error/has-more state and
/// advances through the feed one window at a time. Views are derived on
/// demand with [`BrowseFeedUseCase::grouped`].
///
/// # Type Parameters
/// * `R` - NeoFeedRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct BrowseFeedUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
    limits: FeedLimits,
    pagination: PaginationPolicy,
    neos: Vec<NeoRecord>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    current_end: Option<NaiveDate>,
}

impl<R, PR> BrowseFeedUseCase<R, PR>
where
    R: NeoFeedRepository,
    PR: ProgressReporter,
{
    pub fn new(
        repository: R,
        progress_reporter: PR,
        limits: FeedLimits,
        pagination: PaginationPolicy,
    ) -> Self {
        Self {
            repository,
            progress_reporter,
            limits,
            pagination,
            neos: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
            current_end: None,
        }
    }

    /// Loads the first window, then up to `extra_pages` more
    ///
    /// A failing first window is returned as an error. A failing later page
    /// stops paging but keeps everything loaded so far; the message stays
    /// available through [`last_error`](Self::last_error).
    pub async fn execute(&mut self, request: FeedRequest) -> Result<FeedResponse> {
        let window = request
            .window
            .unwrap_or_else(|| FeedWindow::starting_at(self.limits.today()));

        self.fetch_window(window, false).await?;
        let mut pages_loaded = 1;

        for _ in 0..request.extra_pages {
            match self.load_more().await {
                Ok(LoadMoreOutcome::Loaded(_)) => pages_loaded += 1,
                Ok(LoadMoreOutcome::Exhausted) | Ok(LoadMoreOutcome::Skipped) => break,
                Err(_) => break,
            }
        }

        Ok(FeedResponse {
            total_loaded: self.neos.len(),
            pages_loaded,
            has_more: self.has_more,
        })
    }

    /// Fetches one window and replaces or extends the record list
    ///
    /// Windows outside the feed horizon are rejected without touching the
    /// repository. On any failure the previous records, end date and
    /// has-more flag are left as they were.
    pub async fn fetch_window(&mut self, window: FeedWindow, append: bool) -> Result<usize> {
        if let Err(e) = self.limits.validate(&window) {
            self.record_error(&e);
            return Err(e);
        }

        self.loading = true;
        self.error = None;
        self.progress_reporter
            .report_loading(&format!("🛰️  Fetching NEO feed for {}...", window));

        let result = self.repository.fetch_feed(&window).await;
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.record_error(&e);
                return Err(e);
            }
        };

        let count = page.record_count();
        let records = page.into_records();

        if append {
            self.neos.extend(records);
        } else {
            self.neos = records;
        }

        self.current_end = Some(window.end());
        self.has_more = count > 0 && self.limits.has_room_after(window.end());

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} object(s) for {}",
            count, window
        ));

        Ok(count)
    }

    /// Advances to the window after the last loaded end date
    pub async fn load_more(&mut self) -> Result<LoadMoreOutcome> {
        if self.loading || !self.has_more {
            return Ok(LoadMoreOutcome::Skipped);
        }
        let Some(current_end) = self.current_end else {
            return Ok(LoadMoreOutcome::Skipped);
        };

        let next = self.pagination.next_window(current_end)?;
        if next.end() > self.limits.future_ceiling() {
            self.has_more = false;
            self.progress_reporter.report(&format!(
                "ℹ️  Reached the feed horizon ({}); no more pages to load",
                self.limits.future_ceiling()
            ));
            return Ok(LoadMoreOutcome::Exhausted);
        }

        let count = self.fetch_window(next, true).await?;
        Ok(LoadMoreOutcome::Loaded(count))
    }

    /// Reloads the default window, replacing everything loaded so far
    pub async fn refresh(&mut self) -> Result<usize> {
        let window = FeedWindow::starting_at(self.limits.today());
        self.fetch_window(window, false).await
    }

    /// Filtered, grouped and sorted view over the loaded records
    pub fn grouped(&self, filters: &FilterOptions) -> Vec<DateGroup<'_>> {
        NeoGrouper::group(&self.neos, filters)
    }

    pub fn neos(&self) -> &[NeoRecord] {
        &self.neos
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_end(&self) -> Option<NaiveDate> {
        self.current_end
    }

    fn record_error(&mut self, error: &anyhow::Error) {
        let message = error.to_string();
        self.progress_reporter
            .report_error(&format!("❌ {}", message));
        self.error = Some(message);
    }
}
