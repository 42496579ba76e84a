use crate::neo_tracking::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportGenerator service for stamping rendered reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Metadata with the current UTC timestamp and a fresh report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Metadata naming this tool, with the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata("neo-watch", env!("CARGO_PKG_VERSION"))
    }
}
