use chrono::NaiveDate;
use neo_watch::prelude::*;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A NeoWs record in wire format, parsed through the real deserializer
pub fn neo_record(
    id: &str,
    approach_date: &str,
    hazardous: bool,
    diameter_km: f64,
    miss_km: f64,
) -> NeoRecord {
    let json = format!(
        r#"{{
            "id": "{id}",
            "neo_reference_id": "{id}",
            "name": "({id})",
            "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr={id}",
            "absolute_magnitude_h": 22.4,
            "is_potentially_hazardous_asteroid": {hazardous},
            "is_sentry_object": false,
            "estimated_diameter": {{
                "kilometers": {{"estimated_diameter_min": {diameter_km}, "estimated_diameter_max": {diameter_km}}},
                "meters": {{"estimated_diameter_min": 1.0, "estimated_diameter_max": 2.0}}
            }},
            "close_approach_data": [{{
                "close_approach_date": "{approach_date}",
                "close_approach_date_full": "{approach_date} 12:00",
                "epoch_date_close_approach": 1704888000000,
                "relative_velocity": {{"kilometers_per_second": "10.5", "kilometers_per_hour": "37800", "miles_per_hour": "23487"}},
                "miss_distance": {{"astronomical": "0.05", "lunar": "19.4", "kilometers": "{miss_km}", "miles": "4660000"}},
                "orbiting_body": "Earth"
            }}]
        }}"#
    );
    serde_json::from_str(&json).unwrap()
}
