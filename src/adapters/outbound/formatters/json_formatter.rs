use crate::application::read_models::{FeedReadModel, NeoDetailReadModel};
use crate::ports::outbound::NeoFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter: pretty-printed read models
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NeoFormatter for JsonFormatter {
    fn format_feed(&self, model: &FeedReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).context("Failed to serialize feed report to JSON")
    }

    fn format_detail(&self, model: &NeoDetailReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).context("Failed to serialize NEO detail to JSON")
    }
}
