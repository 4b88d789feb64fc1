//! HTTP client construction

use crate::{core::config::AppConfig, Result};
use reqwest::Client;

/// Build the client used for live fetches: fixed user agent, bounded per-request deadline.
pub fn build_client(config: &AppConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.request_timeout)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_client_with_defaults() {
        let config = AppConfig::new("/tmp/powerrankings");
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn test_build_client_with_custom_settings() {
        let mut config = AppConfig::new("/tmp/powerrankings");
        config.user_agent = "powerrankings-test/1.0".to_string();
        config.request_timeout = Duration::from_millis(250);
        assert!(build_client(&config).is_ok());
    }
}
