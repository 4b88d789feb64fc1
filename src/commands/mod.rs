//! Command implementations for the power rankings CLI

pub mod export;
pub mod rankings;

pub use export::{export_csv, export_rows};
pub use rankings::{handle_rankings, run_rankings, write_report, RankingsParams};
