//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that flatten feed and lookup results into
//! what the formatters render.

pub mod feed_read_model;
pub mod neo_detail_read_model;
pub mod read_model_builder;

pub use feed_read_model::{
    DateGroupView, FeedReadModel, FilterView, NeoSummaryView, ReportMetadataView,
};
pub use neo_detail_read_model::{CloseApproachView, DiameterView, NeoDetailReadModel, OrbitalView};
pub use read_model_builder::{FeedSnapshot, ReadModelBuilder};
