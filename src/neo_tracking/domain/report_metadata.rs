/// ReportMetadata value object stamped on every rendered report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, report_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            report_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}
