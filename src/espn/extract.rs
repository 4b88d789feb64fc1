//! Applying league rules to parsed pages.

use scraper::Html;
use tracing::warn;

use crate::espn::html::{
    child_elements, create_selector, enclosing, has_child, parent_link_href, visible_text,
};
use crate::espn::rules::{LeagueRules, RankingLayout, TocRules};
use crate::storage::RankEntry;
use crate::{Result, WeekId};


/// Find the current week and its ranking page URL on a league landing page.
pub fn find_current_week(rules: &LeagueRules, doc: &Html) -> Result<Option<(WeekId, String)>> {
    let labels = create_selector(rules.home.label_selector)?;

    let found = doc
        .select(&labels)
        .filter(|label| visible_text(*label) == rules.home.title)
        .filter_map(parent_link_href)
        .find_map(|href| {
            rules
                .week_from_url(href)
                .map(|week| (week, rules.normalize_url(href)))
        });
    Ok(found)
}

/// Collect `(week, url)` links to earlier weeks listed after the TOC marker.
pub fn harvest_toc(rules: &LeagueRules, toc: &TocRules, doc: &Html) -> Result<Vec<(WeekId, String)>> {
    let markers = create_selector(toc.marker_selector)?;

    let Some(container) = doc
        .select(&markers)
        .find(|marker| visible_text(*marker) == toc.marker_text)
        .and_then(|marker| enclosing(marker, toc.container_tag))
    else {
        return Ok(Vec::new());
    };

    let links = child_elements(container, "a")
        .filter_map(|anchor| {
            let week = toc.week_from_label(&visible_text(anchor))?;
            let href = anchor.value().attr("href").unwrap_or("");
            Some((week, rules.normalize_url(href)))
        })
        .collect();
    Ok(links)
}

/// Ranking entries on a ranking page, in page order.
///
/// Candidate blocks that do not read as a ranking line are logged and skipped.
pub fn extract_rankings(rules: &LeagueRules, doc: &Html) -> Result<Vec<RankEntry>> {
    match &rules.layout {
        RankingLayout::LinkedBlocks { selector } => {
            let blocks = create_selector(selector)?;
            Ok(doc
                .select(&blocks)
                .filter(|block| has_child(*block, "a"))
                .filter_map(|block| parse_block(rules, &visible_text(block)))
                .collect())
        }
        RankingLayout::SectionHeadings { container, heading } => {
            let containers = create_selector(container)?;
            for section in doc.select(&containers) {
                let entries: Vec<RankEntry> = child_elements(section, heading)
                    .filter_map(|block| parse_block(rules, &visible_text(block)))
                    .collect();
                if !entries.is_empty() {
                    return Ok(entries);
                }
            }
            Ok(Vec::new())
        }
    }
}

fn parse_block(rules: &LeagueRules, text: &str) -> Option<RankEntry> {
    let entry = rules.parse_rank_line(text);
    if entry.is_none() {
        warn!(league = %rules.league, text, "unexpected text in (presumably) rank text");
    }
    entry
}
