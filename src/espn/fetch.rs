//! Record/replay page fetching.
//!
//! In record mode every successful GET is appended to a fetch log, one JSON
//! object per line. In replay mode the log is read back front to back and
//! returned in order instead of touching the network, so a scrape can be
//! reproduced exactly. Replay is positional: entry N answers the N-th call.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::core::{append_line, build_client, write_bytes, AppConfig};
use crate::{League, PrError, Result, ResultExt};


/// How `FetchCache::get` obtains payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Fetch live and append each payload to a fresh log
    Record,
    /// Serve payloads from the last recorded log.
    ///
    /// With `strict`, a call whose URL differs from the recorded one fails
    /// instead of being served with a warning.
    Replay { strict: bool },
}

/// Raw page bytes as stored in the log: text when it is UTF-8, byte values otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Payload::Text(text),
            Err(e) => Payload::Bytes(e.into_bytes()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Text(text) => text.into_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }
}

/// One line of the fetch log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchLogEntry {
    pub seq: usize,
    pub url: String,
    pub body: Payload,
}

impl FetchLogEntry {
    pub fn new(seq: usize, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            seq,
            url: url.into(),
            body: Payload::from_bytes(body.into()),
        }
    }
}

/// Append `entry` to the log at `path`.
pub fn append_entry(path: &Path, entry: &FetchLogEntry) -> Result<()> {
    let line = serde_json::to_string(entry)?;
    append_line(path, &line)?;
    Ok(())
}

/// Read every entry of the log at `path`, in recorded order.
pub fn read_log(path: &Path) -> Result<Vec<FetchLogEntry>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PrError::FetchLogMissing {
                path: path.display().to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str::<FetchLogEntry>(line)
                .step("read fetch log", format!("line {}", n + 1))
        })
        .collect()
}

enum Source {
    Live(Client),
    Recorded {
        history: VecDeque<FetchLogEntry>,
        strict: bool,
    },
}

/// Page source that records or replays payloads
pub struct FetchCache {
    source: Source,
    log_path: PathBuf,
    snapshot_path: PathBuf,
    position: usize,
}

impl FetchCache {
    /// Open the league's fetch log from `config` in the given mode.
    pub fn open(config: &AppConfig, league: League, mode: FetchMode) -> Result<Self> {
        let log_path = config.fetch_log_path(league);
        let snapshot_path = config.debug_snapshot_path();
        match mode {
            FetchMode::Record => Self::record(build_client(config)?, log_path, snapshot_path),
            FetchMode::Replay { strict } => Self::replay(log_path, snapshot_path, strict),
        }
    }

    /// Live fetching; truncates any previous log at `log_path`.
    pub fn record(
        client: Client,
        log_path: impl Into<PathBuf>,
        snapshot_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let log_path = log_path.into();
        write_bytes(&log_path, b"").step("reset fetch log", log_path.display().to_string())?;

        Ok(Self {
            source: Source::Live(client),
            log_path,
            snapshot_path: snapshot_path.into(),
            position: 0,
        })
    }

    /// Replay the log at `log_path`, which must exist.
    pub fn replay(
        log_path: impl Into<PathBuf>,
        snapshot_path: impl Into<PathBuf>,
        strict: bool,
    ) -> Result<Self> {
        let log_path = log_path.into();
        let history: VecDeque<FetchLogEntry> = read_log(&log_path)?.into();
        debug!(path = %log_path.display(), entries = history.len(), "loaded fetch log for replay");

        Ok(Self {
            source: Source::Recorded { history, strict },
            log_path,
            snapshot_path: snapshot_path.into(),
            position: 0,
        })
    }

    pub fn mode(&self) -> FetchMode {
        match &self.source {
            Source::Live(_) => FetchMode::Record,
            Source::Recorded { strict, .. } => FetchMode::Replay { strict: *strict },
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Number of `get` calls answered so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Recorded entries not yet replayed
    pub fn remaining(&self) -> usize {
        match &self.source {
            Source::Live(_) => 0,
            Source::Recorded { history, .. } => history.len(),
        }
    }

    /// Fetch the page at `url`.
    pub async fn get(&mut self, url: &str) -> Result<Vec<u8>> {
        let body = match &mut self.source {
            Source::Live(client) => {
                fetch_live(client, url, self.position, &self.log_path).await?
            }
            Source::Recorded { history, strict } => {
                next_recorded(history, *strict, url, self.position)?
            }
        };
        self.position += 1;

        if let Err(e) = write_bytes(&self.snapshot_path, &body) {
            warn!(path = %self.snapshot_path.display(), error = %e, "could not write debug snapshot");
        }
        Ok(body)
    }
}

async fn fetch_live(client: &Client, url: &str, seq: usize, log_path: &Path) -> Result<Vec<u8>> {
    debug!(url, "GET");
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let entry = FetchLogEntry::new(seq, url, bytes.to_vec());
    append_entry(log_path, &entry).step("append fetch log", log_path.display().to_string())?;
    Ok(entry.body.into_bytes())
}

fn next_recorded(
    history: &mut VecDeque<FetchLogEntry>,
    strict: bool,
    url: &str,
    position: usize,
) -> Result<Vec<u8>> {
    let entry = history
        .pop_front()
        .ok_or(PrError::ReplayExhausted { position })?;

    if entry.url != url {
        if strict {
            return Err(PrError::ReplayMismatch {
                seq: entry.seq,
                recorded: entry.url,
                requested: url.to_string(),
            });
        }
        warn!(
            seq = entry.seq,
            recorded = %entry.url,
            requested = url,
            "replaying payload recorded for a different url"
        );
    }

    debug!(seq = entry.seq, url, "replay");
    Ok(entry.body.into_bytes())
}
