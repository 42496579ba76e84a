use crate::shared::error::NeoError;
use crate::shared::Result;
use chrono::{Days, NaiveDate};

/// Largest distance in days between the start and end of one feed request
pub const MAX_WINDOW_DAYS: i64 = 7;

/// Default number of days on either side of today a window may start
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Widest horizon accepted on either side of today (about a century)
pub const MAX_HORIZON_DAYS: u32 = 36_500;

/// Inclusive date range for a single feed request
///
/// Construction enforces the provider's contract, so a `FeedWindow`
/// that exists never spans more than seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl FeedWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(NeoError::InvertedWindow { start, end }.into());
        }

        let days = (end - start).num_days();
        if days > MAX_WINDOW_DAYS {
            return Err(NeoError::WindowTooWide { start, end, days }.into());
        }

        Ok(Self { start, end })
    }

    /// Seven calendar days starting at `today` (today + 6)
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today + Days::new(6),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Range of acceptable window starts around a reference day
///
/// Both bounds are resolved at construction; a horizon that leaves the
/// supported calendar range is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLimits {
    today: NaiveDate,
    earliest: NaiveDate,
    future_ceiling: NaiveDate,
}

impl FeedLimits {
    pub fn new(today: NaiveDate, past_limit_days: u32, future_limit_days: u32) -> Result<Self> {
        let earliest = today
            .checked_sub_days(Days::new(u64::from(past_limit_days)))
            .ok_or_else(|| horizon_error("past_limit_days", past_limit_days))?;
        let future_ceiling = today
            .checked_add_days(Days::new(u64::from(future_limit_days)))
            .ok_or_else(|| horizon_error("future_limit_days", future_limit_days))?;

        Ok(Self {
            today,
            earliest,
            future_ceiling,
        })
    }

    pub fn around(today: NaiveDate) -> Result<Self> {
        Self::new(today, DEFAULT_HORIZON_DAYS, DEFAULT_HORIZON_DAYS)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// Last day pagination may reach
    pub fn future_ceiling(&self) -> NaiveDate {
        self.future_ceiling
    }

    pub fn validate(&self, window: &FeedWindow) -> Result<()> {
        let earliest = self.earliest();
        let latest = self.future_ceiling();
        if window.start() < earliest || window.start() > latest {
            return Err(NeoError::OutsideHorizon {
                date: window.start(),
                earliest,
                latest,
            }
            .into());
        }
        Ok(())
    }

    /// Whether a window ending on `end` leaves room for another page
    pub fn has_room_after(&self, end: NaiveDate) -> bool {
        end.succ_opt()
            .map(|next| next <= self.future_ceiling)
            .unwrap_or(false)
    }
}

fn horizon_error(field: &str, days: u32) -> anyhow::Error {
    NeoError::Validation {
        message: format!("{} = {} reaches past the supported calendar range", field, days),
    }
    .into()
}
