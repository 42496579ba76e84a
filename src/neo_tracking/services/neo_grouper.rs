use crate::neo_tracking::domain::{DateGroup, FilterOptions, NeoRecord, SortKey, SortOrder};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// NeoGrouper service: the filter/group/sort transform behind the feed views
///
/// Pure and cheap enough to rerun whenever the filters change, so callers
/// keep the flat record list and derive groups on demand.
pub struct NeoGrouper;

impl NeoGrouper {
    /// Groups records by first close-approach date, then filters and sorts
    ///
    /// Records without close-approach data are left out. Groups that end up
    /// empty after filtering are dropped entirely.
    pub fn group<'a>(neos: &'a [NeoRecord], filters: &FilterOptions) -> Vec<DateGroup<'a>> {
        let mut by_date: BTreeMap<NaiveDate, Vec<&'a NeoRecord>> = BTreeMap::new();
        for neo in neos {
            if let Some(date) = neo.approach_date() {
                by_date.entry(date).or_default().push(neo);
            }
        }

        let mut groups: Vec<DateGroup<'a>> = by_date
            .into_iter()
            .filter(|(date, _)| filters.date_matches(*date))
            .filter_map(|(date, mut members)| {
                if filters.hazardous_only {
                    members.retain(|neo| neo.is_potentially_hazardous_asteroid);
                }
                Self::sort_members(&mut members, filters.sort_by, filters.sort_order);
                (!members.is_empty()).then(|| DateGroup::new(date, members))
            })
            .collect();

        // BTreeMap iteration is already ascending
        if filters.sort_order == SortOrder::Desc {
            groups.reverse();
        }

        groups
    }

    /// Stable sort within one group; `Date` keeps feed order
    fn sort_members(members: &mut [&NeoRecord], key: SortKey, order: SortOrder) {
        let metric: fn(&NeoRecord) -> f64 = match key {
            SortKey::Date => return,
            SortKey::Size => NeoRecord::average_diameter_km,
            SortKey::Distance => NeoRecord::miss_distance_km,
        };

        members.sort_by(|a, b| {
            let ordering = metric(a).total_cmp(&metric(b));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    /// Number of records that survive the filters
    pub fn visible_count(groups: &[DateGroup<'_>]) -> usize {
        groups.iter().map(DateGroup::len).sum()
    }
}
