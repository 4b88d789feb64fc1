//! Type-safe wrappers for leagues and weeks.

pub mod league;
pub mod time;

pub use league::League;
pub use time::WeekId;
