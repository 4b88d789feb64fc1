//! Season document persistence

use super::models::SeasonRecord;
use crate::core::cache::write_string_atomic;
use crate::{League, Result, ResultExt};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// One league's season, held in memory and mirrored to a JSON document
#[derive(Debug)]
pub struct SeasonStore {
    pub(crate) season: SeasonRecord,
    path: Option<PathBuf>,
}

impl SeasonStore {
    /// Load the season document at `path`.
    ///
    /// A missing document is replaced by an empty season, which is written
    /// immediately as the new baseline.
    pub fn load(path: impl Into<PathBuf>, league: League) -> Result<Self> {
        let path = path.into();
        let shown = path.display().to_string();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %shown, "no season document, starting a new one");
                let store = Self {
                    season: SeasonRecord::empty(league.code()),
                    path: Some(path),
                };
                store.save()?;
                return Ok(store);
            }
            Err(e) => return Err(e).step("load season", shown),
        };

        let season: SeasonRecord = serde_json::from_str(&text).step("load season", &shown)?;
        debug!(path = %shown, weeks = season.weeks.len(), "loaded season");

        let mut store = Self {
            season,
            path: Some(path),
        };
        store.normalize();
        Ok(store)
    }

    /// A store that never touches the disk
    pub fn in_memory(league: League) -> Self {
        Self {
            season: SeasonRecord::empty(league.code()),
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Overwrite the persisted document with the full in-memory season.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let shown = path.display().to_string();
        let json = serde_json::to_string_pretty(&self.season).step("save season", &shown)?;
        write_string_atomic(path, &json).step("save season", &shown)?;
        debug!(path = %shown, weeks = self.season.weeks.len(), "saved season");
        Ok(())
    }

    pub fn season(&self) -> &SeasonRecord {
        &self.season
    }
}
