//! Storage layer for the power rankings scraper
//!
//! One JSON document per league holds every scraped week:
//! - `models`: Data structures
//! - `schema`: Document load/save
//! - `queries`: Lookup, upsert and week ordering

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and store struct for easy access
pub use models::*;
pub use schema::SeasonStore;
