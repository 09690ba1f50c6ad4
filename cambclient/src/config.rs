//! Immutable client configuration and its one-shot resolution step.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cambclient::CambConfig;
//!
//! let config = CambConfig::builder()
//!     .api_key("camb-test-key")
//!     .poll_interval(Duration::from_millis(500))
//!     .max_poll_attempts(10)
//!     .build()
//!     .expect("config should resolve");
//!
//! assert_eq!(config.max_poll_attempts(), 10);
//! assert_eq!(config.base_url(), cambclient::DEFAULT_BASE_URL);
//! ```

use std::time::Duration;

use crate::{CambError, SecretString, resolve_api_key};

pub const DEFAULT_BASE_URL: &str = "https://client.camb.ai/apis";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;

#[derive(Debug, Clone)]
pub struct CambConfig {
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl CambConfig {
    pub fn builder() -> CambConfigBuilder {
        CambConfigBuilder::default()
    }

    /// Builds a config from `CAMB_API_KEY` and defaults for everything else.
    pub fn from_env() -> Result<Self, CambError> {
        Self::builder().build()
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn max_poll_attempts(&self) -> u32 {
        self.max_poll_attempts
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CambConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    max_poll_attempts: Option<u32>,
}

impl CambConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = Some(poll_interval);
        self
    }

    pub fn max_poll_attempts(mut self, max_poll_attempts: u32) -> Self {
        self.max_poll_attempts = Some(max_poll_attempts);
        self
    }

    pub fn build(self) -> Result<CambConfig, CambError> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Resolves the config against a caller-supplied environment lookup.
    ///
    /// The credential is resolved before any other field is checked.
    pub fn build_with_env(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<CambConfig, CambError> {
        let api_key = resolve_api_key(self.api_key.as_deref(), lookup)?;

        let base_url = self
            .base_url
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.is_empty() {
            return Err(CambError::validation("base_url must not be empty"));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(CambError::validation("timeout must be greater than zero"));
        }

        let poll_interval = self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL);
        if poll_interval.is_zero() {
            return Err(CambError::validation(
                "poll_interval must be greater than zero",
            ));
        }

        let max_poll_attempts = self.max_poll_attempts.unwrap_or(DEFAULT_MAX_POLL_ATTEMPTS);
        if max_poll_attempts == 0 {
            return Err(CambError::validation(
                "max_poll_attempts must be greater than zero",
            ));
        }

        Ok(CambConfig {
            api_key,
            base_url,
            timeout,
            poll_interval,
            max_poll_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CambErrorKind;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_apply_when_only_key_is_given() {
        let config = CambConfig::builder()
            .api_key("key")
            .build_with_env(no_env)
            .expect("config should build");

        assert_eq!(config.api_key().expose(), "key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.poll_interval(), DEFAULT_POLL_INTERVAL);
        assert_eq!(config.max_poll_attempts(), DEFAULT_MAX_POLL_ATTEMPTS);
    }

    #[test]
    fn missing_credential_reported_before_other_validation() {
        let error = CambConfig::builder()
            .timeout(Duration::ZERO)
            .max_poll_attempts(0)
            .build_with_env(no_env)
            .expect_err("config should fail");

        assert_eq!(error.kind, CambErrorKind::MissingCredential);
    }

    #[test]
    fn environment_key_is_used_as_fallback() {
        let config = CambConfig::builder()
            .build_with_env(|_| Some("env-key".to_string()))
            .expect("config should build");
        assert_eq!(config.api_key().expose(), "env-key");
    }

    #[test]
    fn non_positive_bounds_are_rejected() {
        let zero_interval = CambConfig::builder()
            .api_key("key")
            .poll_interval(Duration::ZERO)
            .build_with_env(no_env)
            .expect_err("zero interval must fail");
        assert_eq!(zero_interval.kind, CambErrorKind::Validation);

        let zero_attempts = CambConfig::builder()
            .api_key("key")
            .max_poll_attempts(0)
            .build_with_env(no_env)
            .expect_err("zero attempts must fail");
        assert_eq!(zero_attempts.kind, CambErrorKind::Validation);
    }

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let config = CambConfig::builder()
            .api_key("key")
            .base_url("https://example.test/apis/")
            .build_with_env(no_env)
            .expect("config should build");

        assert_eq!(
            config.endpoint("/tts-stream"),
            "https://example.test/apis/tts-stream"
        );
    }
}
