//! Power-rankings scraping for one league.
//!
//! A run walks through these states:
//!
//! 1. **Home discovery**: the landing page names the current week and links
//!    to its ranking page. That week seeds the week -> URL map.
//! 2. **TOC harvest** (leagues that have one): the first ranking page fetched
//!    while only the current week is known lists links to earlier weeks,
//!    which are merged into the map.
//! 3. **Week scrapes**: the current week first, then every other known week
//!    in week order. Weeks already stored are skipped unless forced; the
//!    current week is always re-parsed.
//! 4. **Done**: the merged season is saved. Any failure before this point
//!    leaves the saved season untouched.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::espn::extract::{extract_rankings, find_current_week, harvest_toc};
use crate::espn::fetch::FetchCache;
use crate::espn::html::parse_page;
use crate::espn::rules::LeagueRules;
use crate::storage::{SeasonStore, WeekRecord};
use crate::{PrError, Result, ResultExt, WeekId};


/// What happened to one ranking page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Parsed and upserted with this many entries
    Parsed(usize),
    /// Already stored and not forced
    Skipped,
}

/// Result of a complete scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub current_week: WeekId,
    pub parsed: Vec<WeekId>,
    pub skipped: Vec<WeekId>,
}

pub struct LeagueScraper {
    rules: LeagueRules,
    fetcher: FetchCache,
    force_update: bool,
    current_week: Option<WeekId>,
    week_urls: BTreeMap<WeekId, String>,
}

impl LeagueScraper {
    pub fn new(rules: LeagueRules, fetcher: FetchCache, force_update: bool) -> Self {
        Self {
            rules,
            fetcher,
            force_update,
            current_week: None,
            week_urls: BTreeMap::new(),
        }
    }

    pub fn rules(&self) -> &LeagueRules {
        &self.rules
    }

    pub fn fetcher(&self) -> &FetchCache {
        &self.fetcher
    }

    /// The week named by the landing page, once discovered
    pub fn current_week(&self) -> Option<&WeekId> {
        self.current_week.as_ref()
    }

    /// Every week with a known ranking page, in week order
    pub fn week_urls(&self) -> &BTreeMap<WeekId, String> {
        &self.week_urls
    }

    /// Fetch the landing page and seed the week map with the current week.
    pub async fn discover_home(&mut self) -> Result<WeekId> {
        self.current_week = None;
        self.week_urls.clear();

        let url = self.rules.home_url.clone();
        let bytes = self.fetcher.get(&url).await.step("get", &url)?;
        let doc = parse_page(&bytes);

        let (week, week_url) = find_current_week(&self.rules, &doc)?.ok_or_else(|| {
            PrError::not_found(format!("{} href", self.rules.home.title))
        })?;

        info!(league = %self.rules.league, week = %week, url = %week_url, "current week");
        self.week_urls.insert(week.clone(), week_url);
        self.current_week = Some(week.clone());
        Ok(week)
    }

    /// Fetch one ranking page, harvest the TOC if due, and upsert its week
    /// unless the skip policy applies.
    pub async fn scrape_ranking_page(
        &mut self,
        week: &WeekId,
        url: &str,
        store: &mut SeasonStore,
    ) -> Result<PageOutcome> {
        let bytes = self.fetcher.get(url).await.step("get", url)?;
        let doc = parse_page(&bytes);

        if let Some(toc) = &self.rules.toc {
            if self.week_urls.len() == 1 {
                let links = harvest_toc(&self.rules, toc, &doc)
                    .step("scrape ranking page", "week TOC")?;
                debug!(league = %self.rules.league, weeks = links.len(), "harvested week TOC");
                for (toc_week, toc_url) in links {
                    self.week_urls.entry(toc_week).or_insert(toc_url);
                }
            }
        }

        let is_current = self.current_week.as_ref() == Some(week);
        if !self.force_update && !is_current && store.contains_week(week) {
            debug!(league = %self.rules.league, week = %week, "already stored, skipping");
            return Ok(PageOutcome::Skipped);
        }

        let rankings = extract_rankings(&self.rules, &doc)?;
        if rankings.is_empty() {
            warn!(league = %self.rules.league, week = %week, url, "no rankings found on page");
        }

        let count = rankings.len();
        store.upsert(WeekRecord::scraped_now(week.clone(), rankings));
        info!(league = %self.rules.league, week = %week, teams = count, "parsed rankings");
        Ok(PageOutcome::Parsed(count))
    }

    /// Discover, scrape every known week, and save the merged season.
    ///
    /// The first failure aborts the run before anything is saved.
    pub async fn scrape(&mut self, store: &mut SeasonStore) -> Result<ScrapeSummary> {
        let page = format!("scrape {} page", self.rules.league.code().to_lowercase());
        let current = self
            .discover_home()
            .await
            .step(&page, "get current rankings url")?;

        let mut summary = ScrapeSummary {
            current_week: current.clone(),
            parsed: Vec::new(),
            skipped: Vec::new(),
        };

        let current_url = self.week_urls.get(&current).cloned().ok_or_else(|| {
            PrError::not_found("Rankings href").within(&page, "get current rankings url")
        })?;
        self.scrape_week(&current, &current_url, store, &mut summary)
            .await?;

        // the current page may have added weeks via the TOC
        let others: Vec<(WeekId, String)> = self
            .week_urls
            .iter()
            .filter(|(week, _)| **week != current)
            .map(|(week, url)| (week.clone(), url.clone()))
            .collect();

        for (week, url) in others {
            self.scrape_week(&week, &url, store, &mut summary).await?;
        }

        store.save()?;
        info!(
            league = %self.rules.league,
            parsed = summary.parsed.len(),
            skipped = summary.skipped.len(),
            "scrape complete"
        );
        Ok(summary)
    }

    async fn scrape_week(
        &mut self,
        week: &WeekId,
        url: &str,
        store: &mut SeasonStore,
        summary: &mut ScrapeSummary,
    ) -> Result<()> {
        let outcome = self
            .scrape_ranking_page(week, url, store)
            .await
            .step(format!("week {week}"), url)?;

        match outcome {
            PageOutcome::Parsed(_) => summary.parsed.push(week.clone()),
            PageOutcome::Skipped => summary.skipped.push(week.clone()),
        }
        Ok(())
    }
}
