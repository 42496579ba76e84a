/// Network adapters for the NeoWs HTTP API
mod nasa_client;

pub use nasa_client::{NasaNeoWsClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
