//! Builder for constructing read models from domain objects

use super::feed_read_model::{
    DateGroupView, FeedReadModel, FilterView, NeoSummaryView, ReportMetadataView,
};
use super::neo_detail_read_model::{
    CloseApproachView, DiameterView, NeoDetailReadModel, OrbitalView,
};
use crate::neo_tracking::domain::{DateGroup, FilterOptions, NeoRecord, ReportMetadata};
use crate::neo_tracking::services::NeoGrouper;

/// Input for [`ReadModelBuilder::build_feed`]: the session state worth showing
pub struct FeedSnapshot<'a> {
    pub groups: &'a [DateGroup<'a>],
    pub filters: &'a FilterOptions,
    pub total_loaded: usize,
    pub has_more: bool,
    pub error: Option<&'a str>,
}

pub struct ReadModelBuilder;

impl ReadModelBuilder {
    /// Builds the feed report from already grouped records
    pub fn build_feed(snapshot: FeedSnapshot<'_>, metadata: &ReportMetadata) -> FeedReadModel {
        FeedReadModel {
            metadata: Self::build_metadata(metadata),
            filters: Self::build_filters(snapshot.filters),
            groups: snapshot
                .groups
                .iter()
                .map(|group| DateGroupView {
                    date: group.date.to_string(),
                    neos: group.neos.iter().map(|neo| Self::build_summary(neo)).collect(),
                })
                .collect(),
            total_loaded: snapshot.total_loaded,
            visible_count: NeoGrouper::visible_count(snapshot.groups),
            has_more: snapshot.has_more,
            error: snapshot.error.map(str::to_string),
        }
    }

    /// Builds the detail report for one record
    pub fn build_detail(
        neo: &NeoRecord,
        orbital_enriched: bool,
        metadata: &ReportMetadata,
    ) -> NeoDetailReadModel {
        let km = &neo.estimated_diameter.kilometers;

        NeoDetailReadModel {
            metadata: Self::build_metadata(metadata),
            id: neo.id.clone(),
            neo_reference_id: neo.neo_reference_id.clone(),
            name: neo.name.clone(),
            jpl_url: neo.nasa_jpl_url.clone(),
            absolute_magnitude_h: neo.absolute_magnitude_h,
            hazardous: neo.is_potentially_hazardous_asteroid,
            sentry: neo.is_sentry_object,
            diameter: DiameterView {
                min_km: km.estimated_diameter_min,
                max_km: km.estimated_diameter_max,
                average_km: km.average(),
            },
            close_approach: neo.first_approach().map(|approach| CloseApproachView {
                date: approach
                    .close_approach_date_full
                    .clone()
                    .unwrap_or_else(|| approach.close_approach_date.to_string()),
                miss_distance_km: approach.miss_distance.kilometers.clone(),
                miss_distance_lunar: approach.miss_distance.lunar.clone(),
                miss_distance_au: approach.miss_distance.astronomical.clone(),
                miss_distance_miles: approach.miss_distance.miles.clone(),
                velocity_km_per_s: approach.relative_velocity.kilometers_per_second.clone(),
                velocity_km_per_h: approach.relative_velocity.kilometers_per_hour.clone(),
                orbiting_body: approach.orbiting_body.clone(),
            }),
            orbital: neo.orbital_data.as_ref().map(|orbital| OrbitalView {
                orbit_id: orbital.orbit_id.clone(),
                orbit_class: orbital.orbit_class.orbit_class_type.clone(),
                orbit_class_description: orbital.orbit_class.orbit_class_description.clone(),
                first_observation_date: orbital.first_observation_date.clone(),
                last_observation_date: orbital.last_observation_date.clone(),
                orbit_determination_date: orbital.orbit_determination_date.clone(),
            }),
            orbital_enriched,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_filters(filters: &FilterOptions) -> FilterView {
        FilterView {
            hazardous_only: filters.hazardous_only,
            sort_by: filters.sort_by.to_string(),
            sort_order: filters.sort_order.to_string(),
            start_date: filters.start_date.map(|d| d.to_string()),
            end_date: filters.end_date.map(|d| d.to_string()),
        }
    }

    fn build_summary(neo: &NeoRecord) -> NeoSummaryView {
        NeoSummaryView {
            id: neo.id.clone(),
            name: neo.name.clone(),
            hazardous: neo.is_potentially_hazardous_asteroid,
            sentry: neo.is_sentry_object,
            average_diameter_km: neo.average_diameter_km(),
            approach_date: neo
                .approach_date()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            miss_distance_km: neo.miss_distance_km(),
            velocity_km_per_s: neo.velocity_km_per_s(),
            jpl_url: neo.nasa_jpl_url.clone(),
        }
    }
}
