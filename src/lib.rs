//! neo-watch - browse NASA's Near-Earth Object close-approach feed
//!
//! Fetches date windows from the NeoWs API, pages forward a window at a
//! time, and shapes the loaded records into per-day views that can be
//! filtered by hazard flag and date range and sorted by size or miss
//! distance. Single objects can be looked up with best-effort orbital data.
//!
//! # Architecture
//!
//! - **Domain Layer** (`neo_tracking`): records, windows, filters and the grouping transform
//! - **Application Layer** (`application`): feed session and lookup use cases, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): NeoWs HTTP client, formatters, console and file output
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use neo_watch::prelude::*;
//! use chrono::Utc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let client = NasaNeoWsClient::new("DEMO_KEY", Duration::from_secs(30))?;
//! let limits = FeedLimits::around(Utc::now().date_naive())?;
//!
//! let mut session = BrowseFeedUseCase::new(
//!     client,
//!     StderrProgressReporter::new(),
//!     limits,
//!     PaginationPolicy::default(),
//! );
//! session.execute(FeedRequest::new(None, 1)).await?;
//!
//! let filters = FilterOptions {
//!     hazardous_only: true,
//!     ..FilterOptions::default()
//! };
//! for group in session.grouped(&filters) {
//!     println!("{}: {} hazardous object(s)", group.date, group.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod neo_tracking;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::NasaNeoWsClient;
    pub use crate::application::dto::{
        DetailRequest, DetailResponse, FeedRequest, FeedResponse, OutputFormat,
    };
    pub use crate::application::read_models::{FeedReadModel, NeoDetailReadModel, ReadModelBuilder};
    pub use crate::application::use_cases::{
        BrowseFeedUseCase, LoadMoreOutcome, ShowNeoDetailsUseCase,
    };
    pub use crate::neo_tracking::domain::{
        DateGroup, FeedLimits, FeedPage, FeedWindow, FilterOptions, FilterUpdate, NeoId,
        NeoRecord, OrbitalData, SortKey, SortOrder,
    };
    pub use crate::neo_tracking::policies::PaginationPolicy;
    pub use crate::neo_tracking::services::{NeoGrouper, ReportGenerator};
    pub use crate::ports::outbound::{
        NeoFeedRepository, NeoFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
