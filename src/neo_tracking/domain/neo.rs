use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Min/max diameter pair in a single unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    pub fn average(&self) -> f64 {
        (self.estimated_diameter_min + self.estimated_diameter_max) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRange,
    pub meters: DiameterRange,
}

/// Relative velocity as reported by the provider (decimal strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: String,
    pub kilometers_per_hour: String,
    pub miles_per_hour: String,
}

/// Miss distance as reported by the provider (decimal strings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissDistance {
    pub astronomical: String,
    pub lunar: String,
    pub kilometers: String,
    pub miles: String,
}

/// A single recorded pass of a NEO near a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date: NaiveDate,
    #[serde(default)]
    pub close_approach_date_full: Option<String>,
    #[serde(default)]
    pub epoch_date_close_approach: Option<i64>,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
    pub orbiting_body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitClass {
    pub orbit_class_type: String,
    #[serde(default)]
    pub orbit_class_description: Option<String>,
}

/// Orbital parameters, only the subset the reports show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    pub orbit_id: String,
    #[serde(default)]
    pub orbit_determination_date: Option<String>,
    #[serde(default)]
    pub first_observation_date: Option<String>,
    #[serde(default)]
    pub last_observation_date: Option<String>,
    pub orbit_class: OrbitClass,
}

/// NEO record as returned by the NeoWs feed and lookup endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub neo_reference_id: String,
    pub name: String,
    pub nasa_jpl_url: String,
    pub absolute_magnitude_h: f64,
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub is_sentry_object: bool,
    pub estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_data: Option<OrbitalData>,
}

impl NeoRecord {
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }

    /// Date used to group the record in the feed views
    pub fn approach_date(&self) -> Option<NaiveDate> {
        self.first_approach().map(|a| a.close_approach_date)
    }

    pub fn average_diameter_km(&self) -> f64 {
        self.estimated_diameter.kilometers.average()
    }

    /// Miss distance of the first approach in km; 0.0 when missing or unparseable
    pub fn miss_distance_km(&self) -> f64 {
        self.first_approach()
            .and_then(|a| a.miss_distance.kilometers.parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    pub fn velocity_km_per_s(&self) -> Option<f64> {
        self.first_approach()
            .and_then(|a| a.relative_velocity.kilometers_per_second.parse::<f64>().ok())
    }
}

/// One feed response: records keyed by the date the provider filed them under
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub element_count: usize,
    #[serde(default)]
    pub near_earth_objects: BTreeMap<NaiveDate, Vec<NeoRecord>>,
}

impl FeedPage {
    /// Flattens the date map in ascending date order
    pub fn into_records(self) -> Vec<NeoRecord> {
        self.near_earth_objects.into_values().flatten().collect()
    }

    pub fn record_count(&self) -> usize {
        self.near_earth_objects.values().map(Vec::len).sum()
    }
}
