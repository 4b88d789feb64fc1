//! ESPN power rankings scraper
//!
//! Scrapes the weekly NBA and NHL power rankings published on ESPN, merges
//! them into a per-league season history on disk, and exports one week as
//! CSV.
//!
//! ## Features
//!
//! - **Record/replay fetching**: every live run records the pages it fetched,
//!   so the last scrape can be reproduced offline with `--replay`
//! - **Per-league extraction rules**: one scrape pipeline, parameterised by
//!   league-specific selectors and patterns
//! - **Season store**: idempotent weekly upserts kept in week order and saved
//!   atomically as JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use powerrankings::{
//!     commands::{run_rankings, RankingsParams},
//!     core::AppConfig,
//!     League,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::resolve(None);
//! let params = RankingsParams {
//!     league: League::NBA,
//!     week: None,
//!     force: false,
//!     replay: false,
//!     strict_replay: false,
//!     out_file: None,
//! };
//!
//! let csv = run_rankings(&config, &params).await?;
//! print!("{csv}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{League, WeekId};
pub use error::{ErrorKind, PrError, Result, ResultExt};
