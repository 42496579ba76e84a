//! Feed read model for the grouped close-approach listing

use serde::Serialize;

/// Main read model for a feed report
///
/// Denormalized view of the filtered and grouped session state, ready for
/// a formatter to render without touching domain types.
#[derive(Debug, Clone, Serialize)]
pub struct FeedReadModel {
    pub metadata: ReportMetadataView,
    pub filters: FilterView,
    pub groups: Vec<DateGroupView>,
    /// Records held by the session, before filtering
    pub total_loaded: usize,
    /// Records left after filtering
    pub visible_count: usize,
    pub has_more: bool,
    /// Last fetch error, when a later page failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// Active filters, stringified for display
#[derive(Debug, Clone, Serialize)]
pub struct FilterView {
    pub hazardous_only: bool,
    pub sort_by: String,
    pub sort_order: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateGroupView {
    pub date: String,
    pub neos: Vec<NeoSummaryView>,
}

/// One row in a date group
#[derive(Debug, Clone, Serialize)]
pub struct NeoSummaryView {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    pub sentry: bool,
    pub average_diameter_km: f64,
    pub approach_date: String,
    pub miss_distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_km_per_s: Option<f64>,
    pub jpl_url: String,
}
