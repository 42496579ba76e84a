use crate::application::read_models::{FeedReadModel, NeoDetailReadModel};
use crate::shared::Result;

/// NeoFormatter port for rendering reports
///
/// Implementations turn the read models into a textual format
/// (Markdown, JSON, ...).
pub trait NeoFormatter {
    /// Renders the grouped feed view
    fn format_feed(&self, model: &FeedReadModel) -> Result<String>;

    /// Renders a single-object detail view
    fn format_detail(&self, model: &NeoDetailReadModel) -> Result<String>;
}
