use chrono::NaiveDate;
use serde::Serialize;

/// Key used to order records within a date group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Approach date; grouping already orders by date, so groups keep feed order
    #[default]
    Date,
    /// Average estimated diameter in kilometers
    Size,
    /// Miss distance of the first close approach in kilometers
    Distance,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "size" => Ok(SortKey::Size),
            "distance" => Ok(SortKey::Distance),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify 'date', 'size' or 'distance'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Size => write!(f, "size"),
            SortKey::Distance => write!(f, "distance"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!(
                "Invalid sort order: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Client-side view filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub hazardous_only: bool,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Partial update of [`FilterOptions`]; `None` leaves a field unchanged
///
/// The date fields are doubly optional so an update can clear a bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub hazardous_only: Option<bool>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

impl FilterOptions {
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(hazardous_only) = update.hazardous_only {
            self.hazardous_only = hazardous_only;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = update.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
    }

    /// Date-only, inclusive match against the active range.
    /// A start date without an end date selects exactly that day.
    pub fn date_matches(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (None, None) => true,
            (Some(start), None) => date == start,
            (Some(start), Some(end)) => date >= start && date <= end,
            (None, Some(end)) => date <= end,
        }
    }
}
