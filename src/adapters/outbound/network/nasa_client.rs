use crate::neo_tracking::domain::{FeedPage, FeedWindow, NeoId, NeoRecord, OrbitalData};
use crate::ports::outbound::NeoFeedRepository;
use crate::shared::error::NeoError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct OrbitalResponse {
    #[serde(default)]
    orbital_data: Option<OrbitalData>,
}

/// NasaNeoWsClient adapter for the NASA NeoWs REST API
///
/// Implements the NeoFeedRepository port. One request per call, no retry;
/// the only deadline is the client-wide request timeout.
pub struct NasaNeoWsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NasaNeoWsClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let user_agent = format!("neo-watch/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Points the client at another server, e.g. a local mock
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn feed_url(&self, window: &FeedWindow) -> String {
        format!(
            "{}/feed?start_date={}&end_date={}&api_key={}",
            self.base_url,
            window.start(),
            window.end(),
            urlencoding::encode(&self.api_key)
        )
    }

    fn lookup_url(&self, id: &NeoId, suffix: &str) -> String {
        format!(
            "{}/neo/{}{}?api_key={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            suffix,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Sends a GET and decodes the body; `None` on 404
    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<Option<T>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach NeoWs while fetching {}", resource))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => return Ok(None),
            StatusCode::TOO_MANY_REQUESTS => return Err(NeoError::RateLimited.into()),
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                return Err(NeoError::InvalidApiKey.into())
            }
            s if !s.is_success() => {
                return Err(NeoError::Upstream {
                    resource: resource.to_string(),
                    status: s.as_u16(),
                }
                .into())
            }
            _ => {}
        }

        let body = response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response from NeoWs", resource))?;
        Ok(Some(body))
    }
}

#[async_trait]
impl NeoFeedRepository for NasaNeoWsClient {
    async fn fetch_feed(&self, window: &FeedWindow) -> Result<FeedPage> {
        let resource = format!("feed {}", window);
        self.get_json::<FeedPage>(&self.feed_url(window), &resource)
            .await?
            .ok_or_else(|| {
                NeoError::Upstream {
                    resource,
                    status: StatusCode::NOT_FOUND.as_u16(),
                }
                .into()
            })
    }

    async fn fetch_neo(&self, id: &NeoId) -> Result<NeoRecord> {
        self.get_json::<NeoRecord>(&self.lookup_url(id, ""), "NEO lookup")
            .await?
            .ok_or_else(|| {
                NeoError::NotFound {
                    id: id.to_string(),
                }
                .into()
            })
    }

    async fn fetch_orbital_data(&self, id: &NeoId) -> Result<Option<OrbitalData>> {
        let response = self
            .get_json::<OrbitalResponse>(&self.lookup_url(id, "/orbital"), "orbital data")
            .await?;
        Ok(response.and_then(|r| r.orbital_data))
    }
}
