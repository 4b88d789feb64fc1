//! Rankings command implementation

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use tracing::info;

use crate::{
    commands::export::export_csv,
    core::AppConfig,
    espn::{FetchCache, FetchMode, LeagueRules, LeagueScraper},
    storage::SeasonStore,
    League, WeekId,
};

/// Parameters for the rankings command
#[derive(Debug)]
pub struct RankingsParams {
    pub league: League,
    pub week: Option<WeekId>,
    pub force: bool,
    pub replay: bool,
    pub strict_replay: bool,
    pub out_file: Option<PathBuf>,
}

impl RankingsParams {
    pub fn fetch_mode(&self) -> FetchMode {
        if self.replay {
            FetchMode::Replay {
                strict: self.strict_replay,
            }
        } else {
            FetchMode::Record
        }
    }
}

/// Scrape the league, then render one week as CSV.
///
/// Returns the report text; it is also written to `out_file` when one is given.
pub async fn run_rankings(config: &AppConfig, params: &RankingsParams) -> anyhow::Result<String> {
    let league = params.league;
    let rules = LeagueRules::for_league(league).context("building extraction rules")?;
    let fetcher = FetchCache::open(config, league, params.fetch_mode())
        .with_context(|| format!("opening fetch log for {league}"))?;

    let db_path = config.season_db_path(league);
    let mut store = SeasonStore::load(&db_path, league)
        .with_context(|| format!("loading {league} season"))?;

    let mut scraper = LeagueScraper::new(rules, fetcher, params.force);
    let summary = scraper
        .scrape(&mut store)
        .await
        .with_context(|| format!("scraping {league} power rankings"))?;

    let week = params.week.clone().unwrap_or(summary.current_week);
    let report = export_csv(&store, &week).with_context(|| format!("exporting week {week}"))?;

    if let Some(out_file) = &params.out_file {
        fs::write(out_file, &report)
            .with_context(|| format!("writing report to {}", out_file.display()))?;
        info!(path = %out_file.display(), week = %week, "report written");
    }
    Ok(report)
}

/// Handle the rankings command: run it and print the report unless it went to a file.
pub async fn handle_rankings(config: &AppConfig, params: RankingsParams) -> anyhow::Result<()> {
    let report = run_rankings(config, &params).await?;
    if params.out_file.is_none() {
        write_report(io::stdout().lock(), &report)?;
    }
    Ok(())
}

/// Write the report to `out`; a closed pipe is an error, not a panic.
pub fn write_report<W: Write>(mut out: W, report: &str) -> anyhow::Result<()> {
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .context("writing report to stdout")
}
