use crate::neo_tracking::domain::{FeedPage, FeedWindow, NeoId, NeoRecord, OrbitalData};
use crate::shared::Result;
use async_trait::async_trait;

/// NeoFeedRepository port for the read-only astronomy feed
///
/// Abstracts the NeoWs REST service so use cases can be exercised
/// against in-memory fakes.
#[async_trait]
pub trait NeoFeedRepository: Send + Sync {
    /// Fetches every record with a close approach inside `window`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The API returns an error status code (rate limit, bad key, ...)
    /// - The response cannot be parsed
    async fn fetch_feed(&self, window: &FeedWindow) -> Result<FeedPage>;

    /// Fetches one record by identifier
    async fn fetch_neo(&self, id: &NeoId) -> Result<NeoRecord>;

    /// Fetches orbital parameters for `id`
    ///
    /// # Returns
    /// `Ok(None)` when the service has no orbital data for the object
    async fn fetch_orbital_data(&self, id: &NeoId) -> Result<Option<OrbitalData>>;
}
