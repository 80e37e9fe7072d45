/// API endpoint configuration.
///
/// Base URLs and client identity for the two upstream APIs, carried in an
/// explicit struct passed to each fetcher rather than read from
/// process-wide state. Tests substitute mock endpoints by constructing an
/// `ApiConfig` pointing at a local server.

/// Production NWS API root.
pub const NWS_BASE_URL: &str = "https://api.weather.gov";

/// Production OpenFEMA v2 API root.
pub const FEMA_BASE_URL: &str = "https://www.fema.gov/api/open/v2";

/// The NWS API rejects requests without an identifying User-Agent.
pub const USER_AGENT: &str = "disasterdb_service/0.1 (disaster database replication)";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub nws_base_url: String,
    pub fema_base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            nws_base_url: NWS_BASE_URL.to_string(),
            fema_base_url: FEMA_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Builds the blocking HTTP client shared by both fetchers.
    pub fn build_client(&self) -> Result<reqwest::blocking::Client, reqwest::Error> {
        reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.clone())
            .build()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_production_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.nws_base_url, "https://api.weather.gov");
        assert_eq!(config.fema_base_url, "https://www.fema.gov/api/open/v2");
    }

    #[test]
    fn test_base_urls_have_no_trailing_slash() {
        // Fetchers join paths with a leading slash; a trailing slash here
        // would produce `//alerts/active` and a 404 from the NWS gateway.
        let config = ApiConfig::default();
        assert!(!config.nws_base_url.ends_with('/'));
        assert!(!config.fema_base_url.ends_with('/'));
    }

    #[test]
    fn test_client_builds_with_default_config() {
        assert!(ApiConfig::default().build_client().is_ok());
    }
}
