use crate::neo_tracking::domain::{FeedWindow, MAX_WINDOW_DAYS};
use crate::shared::error::NeoError;
use crate::shared::Result;
use chrono::{Days, NaiveDate};

/// Default page size in calendar days (one full provider window)
pub const DEFAULT_PAGE_SPAN_DAYS: u32 = 7;

/// Decides the window fetched by "load more"
///
/// Each page starts on the day after the last loaded end date and
/// covers `span_days` calendar days, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    span_days: u32,
}

impl PaginationPolicy {
    pub fn new(span_days: u32) -> Result<Self> {
        // A span of N calendar days is N - 1 days between start and end
        if span_days == 0 || i64::from(span_days) > MAX_WINDOW_DAYS {
            return Err(NeoError::Validation {
                message: format!(
                    "page span must be between 1 and {} days, got {}",
                    MAX_WINDOW_DAYS, span_days
                ),
            }
            .into());
        }
        Ok(Self { span_days })
    }

    pub fn span_days(&self) -> u32 {
        self.span_days
    }

    pub fn next_window(&self, last_end: NaiveDate) -> Result<FeedWindow> {
        let start = last_end + Days::new(1);
        let end = start + Days::new(u64::from(self.span_days - 1));
        FeedWindow::new(start, end)
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            span_days: DEFAULT_PAGE_SPAN_DAYS,
        }
    }
}
