use super::NeoRecord;
use chrono::NaiveDate;

/// Records sharing a first close-approach date, borrowed from the session's list
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub neos: Vec<&'a NeoRecord>,
}

impl<'a> DateGroup<'a> {
    pub fn new(date: NaiveDate, neos: Vec<&'a NeoRecord>) -> Self {
        Self { date, neos }
    }

    pub fn len(&self) -> usize {
        self.neos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neos.is_empty()
    }
}
