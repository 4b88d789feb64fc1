//! Core utilities for the power rankings scraper
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system helpers (atomic writes, append-only logs)
//! - `config`: Run configuration and persisted file locations
//! - `http`: HTTP client construction

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{append_line, write_bytes, write_string_atomic};
pub use config::{default_data_dir, AppConfig, DEFAULT_USER_AGENT};
pub use http::build_client;
