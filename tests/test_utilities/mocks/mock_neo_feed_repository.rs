use async_trait::async_trait;
use chrono::NaiveDate;
use neo_watch::prelude::*;
use neo_watch::shared::error::NeoError;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock NeoFeedRepository serving canned data without network access
///
/// Feed pages are keyed by window start; windows without a page come back
/// empty. Every feed request is logged so tests can assert on what was asked.
#[derive(Default, Clone)]
pub struct MockNeoFeedRepository {
    pages: HashMap<NaiveDate, Vec<NeoRecord>>,
    failing_windows: HashSet<NaiveDate>,
    records: HashMap<String, NeoRecord>,
    orbital: HashMap<String, OrbitalData>,
    orbital_fails: bool,
    pub requested_windows: Arc<Mutex<Vec<FeedWindow>>>,
}

#[allow(dead_code)]
impl MockNeoFeedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, start: NaiveDate, records: Vec<NeoRecord>) -> Self {
        self.pages.insert(start, records);
        self
    }

    pub fn failing_at(mut self, start: NaiveDate) -> Self {
        self.failing_windows.insert(start);
        self
    }

    pub fn with_record(mut self, record: NeoRecord) -> Self {
        self.records.insert(record.id.clone(), record);
        self
    }

    pub fn with_orbital(mut self, id: &str, orbital: OrbitalData) -> Self {
        self.orbital.insert(id.to_string(), orbital);
        self
    }

    pub fn with_failing_orbital(mut self) -> Self {
        self.orbital_fails = true;
        self
    }

    pub fn request_count(&self) -> usize {
        self.requested_windows.lock().unwrap().len()
    }
}

#[async_trait]
impl NeoFeedRepository for MockNeoFeedRepository {
    async fn fetch_feed(&self, window: &FeedWindow) -> Result<FeedPage> {
        self.requested_windows.lock().unwrap().push(*window);

        if self.failing_windows.contains(&window.start()) {
            return Err(NeoError::Upstream {
                resource: format!("feed {}", window),
                status: 503,
            }
            .into());
        }

        let mut near_earth_objects: BTreeMap<NaiveDate, Vec<NeoRecord>> = BTreeMap::new();
        for record in self.pages.get(&window.start()).cloned().unwrap_or_default() {
            let key = record.approach_date().unwrap_or(window.start());
            near_earth_objects.entry(key).or_default().push(record);
        }

        Ok(FeedPage {
            element_count: near_earth_objects.values().map(Vec::len).sum(),
            near_earth_objects,
        })
    }

    async fn fetch_neo(&self, id: &NeoId) -> Result<NeoRecord> {
        self.records.get(id.as_str()).cloned().ok_or_else(|| {
            NeoError::NotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    async fn fetch_orbital_data(&self, id: &NeoId) -> Result<Option<OrbitalData>> {
        if self.orbital_fails {
            return Err(NeoError::RateLimited.into());
        }
        Ok(self.orbital.get(id.as_str()).cloned())
    }
}
