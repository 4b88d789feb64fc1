//! Data models for the storage layer

use crate::cli::types::WeekId;
use serde::{Deserialize, Serialize};

/// Timestamp format of `WeekRecord::modified` (local time)
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One team's position in a week's rankings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub team: String,
    pub rank: u32,
}

impl RankEntry {
    pub fn new(team: impl Into<String>, rank: u32) -> Self {
        Self {
            team: team.into(),
            rank,
        }
    }
}

/// Rankings scraped for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    pub week: WeekId,
    pub modified: String,
    pub rankings: Vec<RankEntry>,
}

impl WeekRecord {
    pub fn new(week: WeekId, modified: impl Into<String>, rankings: Vec<RankEntry>) -> Self {
        Self {
            week,
            modified: modified.into(),
            rankings,
        }
    }

    /// Stamp a freshly scraped week with the current local time.
    pub fn scraped_now(week: WeekId, rankings: Vec<RankEntry>) -> Self {
        Self::new(week, now_stamp(), rankings)
    }

    /// Stable sort, so equal ranks keep their page order.
    pub fn sort_rankings(&mut self) {
        self.rankings.sort_by_key(|entry| entry.rank);
    }
}

/// Every stored week of one league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub league: String,
    pub weeks: Vec<WeekRecord>,
}

impl SeasonRecord {
    pub fn empty(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            weeks: Vec::new(),
        }
    }
}

pub fn now_stamp() -> String {
    chrono::Local::now().format(MODIFIED_FORMAT).to_string()
}
