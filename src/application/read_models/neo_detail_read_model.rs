//! Detail read model for a single looked-up object

use super::feed_read_model::ReportMetadataView;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NeoDetailReadModel {
    pub metadata: ReportMetadataView,
    pub id: String,
    pub neo_reference_id: String,
    pub name: String,
    pub jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub hazardous: bool,
    pub sentry: bool,
    pub diameter: DiameterView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_approach: Option<CloseApproachView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbital: Option<OrbitalView>,
    pub orbital_enriched: bool,
}

/// Estimated diameter in kilometres
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiameterView {
    pub min_km: f64,
    pub max_km: f64,
    pub average_km: f64,
}

/// First recorded close approach; distances and speeds keep the provider's strings
#[derive(Debug, Clone, Serialize)]
pub struct CloseApproachView {
    pub date: String,
    pub miss_distance_km: String,
    pub miss_distance_lunar: String,
    pub miss_distance_au: String,
    pub miss_distance_miles: String,
    pub velocity_km_per_s: String,
    pub velocity_km_per_h: String,
    pub orbiting_body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrbitalView {
    pub orbit_id: String,
    pub orbit_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_class_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_observation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_observation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_determination_date: Option<String>,
}
