//! League-specific extraction rules.
//!
//! Everything that differs between leagues lives here as data: where the
//! landing page is, which link leads to the current rankings, whether older
//! weeks are linked from a ranking page, and how a ranking line reads.

use regex::Regex;

use crate::storage::RankEntry;
use crate::{League, Result, WeekId};

/// Prefix for site-relative links
pub const ESPN_ROOT: &str = "http://www.espn.com";

/// The labelled link on a league's landing page that points at the current rankings
#[derive(Debug, Clone)]
pub struct HomeMarker {
    /// Elements holding the link label
    pub label_selector: &'static str,
    /// Visible text of the label
    pub title: &'static str,
    /// Pulls the week id out of the link destination
    pub week_from_url: Regex,
}

/// Links to previous weeks embedded in a ranking page
#[derive(Debug, Clone)]
pub struct TocRules {
    pub marker_selector: &'static str,
    pub marker_text: &'static str,
    /// Enclosing element whose links are harvested
    pub container_tag: &'static str,
    /// Pulls the week id out of a link's visible text
    pub week_label: Regex,
}

impl TocRules {
    pub fn week_from_label(&self, label: &str) -> Option<WeekId> {
        self.week_label
            .captures(label.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| WeekId::from(m.as_str()))
    }
}

/// Where ranking lines sit on a ranking page
#[derive(Debug, Clone)]
pub enum RankingLayout {
    /// Every element matched by `selector` that wraps a link is one line
    LinkedBlocks { selector: &'static str },
    /// The `heading` children of the first `container` that yields any ranking
    SectionHeadings {
        container: &'static str,
        heading: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct LeagueRules {
    pub league: League,
    pub home_url: String,
    pub site_root: String,
    pub home: HomeMarker,
    pub toc: Option<TocRules>,
    pub layout: RankingLayout,
    /// Capture 1 is the rank, capture 2 the team
    pub rank_line: Regex,
}

impl LeagueRules {
    pub fn for_league(league: League) -> Result<Self> {
        match league {
            League::NBA => Self::nba(),
            League::NHL => Self::nhl(),
        }
    }

    pub fn nba() -> Result<Self> {
        Ok(Self {
            league: League::NBA,
            home_url: format!("{ESPN_ROOT}/nba/"),
            site_root: ESPN_ROOT.to_string(),
            home: HomeMarker {
                label_selector: r#"span[class="link-text"]"#,
                title: "Rankings",
                week_from_url: Regex::new(r"week-(\d+)-rankings")?,
            },
            toc: Some(TocRules {
                marker_selector: "p em strong",
                marker_text: "Previous rankings:",
                container_tag: "p",
                week_label: Regex::new(r"^(?:Week )?(\d+|Camp)")?,
            }),
            layout: RankingLayout::LinkedBlocks {
                selector: "#article-feed article .container b",
            },
            rank_line: Regex::new(r"^(\d+)\.\s+(.*)")?,
        })
    }

    /// Lines look like
    /// `1. (Last week: 1) Washington Capitals, 44-13-7`,
    /// `12. (16) Montreal Canadiens, 37-21-8.` or
    /// `31. (N/A) Vegas Golden Knights`.
    pub fn nhl() -> Result<Self> {
        Ok(Self {
            league: League::NHL,
            home_url: format!("{ESPN_ROOT}/nhl/"),
            site_root: ESPN_ROOT.to_string(),
            home: HomeMarker {
                label_selector: r#"span[class="link-text"]"#,
                title: "Power Rankings",
                week_from_url: Regex::new(r"/page/powerrankings-([^/]+)/")?,
            },
            toc: None,
            layout: RankingLayout::SectionHeadings {
                container: r#"div[class="article-body"]"#,
                heading: "h2",
            },
            rank_line: Regex::new(r"^(\d+)\.\s+(?:\([^\)]+\)\s+)?([^,]+)(?:,\s+[\d\-\.]+)?\s*$")?,
        })
    }

    /// Point every request at `root` instead of the live site.
    pub fn with_site_root(mut self, root: &str) -> Self {
        let root = root.trim_end_matches('/');
        let path = self
            .home_url
            .strip_prefix(&self.site_root)
            .unwrap_or("/")
            .to_string();
        self.home_url = format!("{root}{path}");
        self.site_root = root.to_string();
        self
    }

    pub fn week_from_url(&self, href: &str) -> Option<WeekId> {
        self.home
            .week_from_url
            .captures(href)
            .and_then(|caps| caps.get(1))
            .map(|m| WeekId::from(m.as_str()))
    }

    /// Absolute links are kept, site-relative ones are prefixed with the site root.
    pub fn normalize_url(&self, href: &str) -> String {
        let lower = href.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            href.trim().to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.site_root, href.trim())
        } else {
            format!("{}/{}", self.site_root, href.trim())
        }
    }

    /// Match one ranking line; `None` when the text is not a ranking.
    ///
    /// Ranks are 1-based, so a rank of 0 does not match.
    pub fn parse_rank_line(&self, text: &str) -> Option<RankEntry> {
        let line = collapse_whitespace(text);
        let caps = self.rank_line.captures(&line)?;
        let rank = caps
            .get(1)?
            .as_str()
            .parse::<u32>()
            .ok()
            .filter(|rank| *rank > 0)?;
        let team = caps.get(2)?.as_str().trim();
        if team.is_empty() {
            return None;
        }
        Some(RankEntry::new(team, rank))
    }
}

/// Collapse whitespace runs to one space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
