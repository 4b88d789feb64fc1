//! ESPN power-rankings pages
//!
//! - `rules`: per-league selectors and patterns
//! - `html`: DOM helpers
//! - `extract`: applying rules to parsed pages
//! - `fetch`: record/replay page fetching
//! - `scraper`: the per-league scrape run

pub mod extract;
pub mod fetch;
pub mod html;
pub mod rules;
pub mod scraper;

pub use fetch::{FetchCache, FetchMode};
pub use rules::LeagueRules;
pub use scraper::{LeagueScraper, ScrapeSummary};
