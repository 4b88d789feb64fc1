//! Week lookup, upsert and ordering

use super::{models::*, schema::SeasonStore};
use crate::WeekId;

impl SeasonStore {
    pub fn league(&self) -> &str {
        &self.season.league
    }

    /// Weeks in week order
    pub fn weeks(&self) -> &[WeekRecord] {
        &self.season.weeks
    }

    pub fn week_ids(&self) -> Vec<WeekId> {
        self.season.weeks.iter().map(|w| w.week.clone()).collect()
    }

    /// Exact-match lookup by week id
    pub fn get_week(&self, week: &WeekId) -> Option<&WeekRecord> {
        self.season.weeks.iter().find(|w| &w.week == week)
    }

    pub fn contains_week(&self, week: &WeekId) -> bool {
        self.get_week(week).is_some()
    }

    /// Last week in week order, if any
    pub fn latest_week(&self) -> Option<&WeekRecord> {
        self.season.weeks.last()
    }

    /// Insert a week, or replace the stored week with the same id.
    ///
    /// Returns true when an existing week was replaced.
    pub fn upsert(&mut self, mut record: WeekRecord) -> bool {
        record.sort_rankings();

        let replaced = match self
            .season
            .weeks
            .iter_mut()
            .find(|w| w.week == record.week)
        {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                self.season.weeks.push(record);
                false
            }
        };

        self.sort_weeks();
        replaced
    }

    /// Restore ordering invariants on data read from disk.
    pub(crate) fn normalize(&mut self) {
        for week in &mut self.season.weeks {
            week.sort_rankings();
        }
        self.sort_weeks();
    }

    fn sort_weeks(&mut self) {
        self.season.weeks.sort_by(|l, r| l.week.cmp(&r.week));
    }
}
