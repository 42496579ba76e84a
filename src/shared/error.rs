use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish argument mistakes from
/// failures talking to the feed or writing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for fetching and shaping NEO data.
#[derive(Debug, Error)]
pub enum NeoError {
    #[error("Invalid date range: {start} to {end}\nReason: the end date is before the start date\n\n💡 Hint: Swap the dates or pick a later end date")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date range: {start} to {end} spans {days} days\nReason: the NeoWs feed only allows 7-day ranges maximum\n\n💡 Hint: Request at most 7 days at a time and use --pages to load more")]
    WindowTooWide {
        start: NaiveDate,
        end: NaiveDate,
        days: i64,
    },

    #[error("Date {date} is outside the feed horizon ({earliest} to {latest})\n\n💡 Hint: Pick a start date within the horizon or widen past_limit_days/future_limit_days in the config file")]
    OutsideHorizon {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Invalid NEO id: {id}\nReason: {reason}\n\n💡 Hint: NEO ids are the numeric identifiers shown in the feed output")]
    InvalidNeoId { id: String, reason: String },

    #[error("NeoWs rate limit exceeded\n\n💡 Hint: Wait before retrying, or use a personal API key instead of DEMO_KEY")]
    RateLimited,

    #[error("NeoWs rejected the API key\n\n💡 Hint: Check --api-key, the NASA_API_KEY environment variable or api_key in the config file")]
    InvalidApiKey,

    #[error("NEO not found: {id}")]
    NotFound { id: String },

    #[error("Failed to fetch {resource} from NeoWs (status {status})")]
    Upstream { resource: String, status: u16 },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
