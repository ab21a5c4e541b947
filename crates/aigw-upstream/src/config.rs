//! Public configuration for the upstream client.

use std::time::Duration;

/// Default whole-request timeout for upstream calls.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for [`ReqwestUpstreamClient`](crate::ReqwestUpstreamClient).
///
/// # Example
///
/// ```
/// use aigw_upstream::UpstreamClientConfig;
/// use std::time::Duration;
///
/// let config = UpstreamClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-gateway/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct UpstreamClientConfig {
    /// User agent string for outbound requests
    pub(crate) user_agent: String,
    /// Whole-request timeout, connect through body
    pub(crate) timeout: Duration,
}

impl Default for UpstreamClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("aigw/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl UpstreamClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
