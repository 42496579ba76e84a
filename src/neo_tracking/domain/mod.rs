pub mod date_group;
pub mod feed_window;
pub mod filter_options;
pub mod neo;
pub mod neo_id;
pub mod report_metadata;

pub use date_group::DateGroup;
pub use feed_window::{
    FeedLimits, FeedWindow, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS, MAX_WINDOW_DAYS,
};
pub use filter_options::{FilterOptions, FilterUpdate, SortKey, SortOrder};
pub use neo::{
    CloseApproach, DiameterRange, EstimatedDiameter, FeedPage, MissDistance, NeoRecord,
    OrbitClass, OrbitalData, RelativeVelocity,
};
pub use neo_id::NeoId;
pub use report_metadata::ReportMetadata;
