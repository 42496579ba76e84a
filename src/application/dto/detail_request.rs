use crate::neo_tracking::domain::{NeoId, NeoRecord};

/// DetailRequest - request DTO for the single-object lookup
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub id: NeoId,
}

impl DetailRequest {
    pub fn new(id: NeoId) -> Self {
        Self { id }
    }
}

/// DetailResponse - the looked-up record and whether orbital data was merged in
#[derive(Debug, Clone)]
pub struct DetailResponse {
    pub neo: NeoRecord,
    pub orbital_enriched: bool,
}
