//! Client configuration

use std::time::Duration;

/// Client configuration
///
/// Immutable after construction; the client never mutates it.
#[derive(Clone, Debug)]
pub struct Config {
    /// Parse Server base URL, without the `/parse` path prefix
    pub server_url: String,
    /// Application id sent as `X-Parse-Application-Id`
    pub app_id: String,
    /// Master key sent as `X-Parse-Master-Key`
    pub master_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Config {
    /// Create a new config for the given server and credentials
    pub fn new(
        server_url: impl Into<String>,
        app_id: impl Into<String>,
        master_key: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            app_id: app_id.into(),
            master_key: master_key.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("parse-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = Config::new("http://localhost:1337/", "app", "key");
        assert_eq!(config.base_url(), "http://localhost:1337");

        let config = Config::new("http://localhost:1337", "app", "key");
        assert_eq!(config.base_url(), "http://localhost:1337");
    }
}
