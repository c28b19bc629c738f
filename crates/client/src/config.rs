//! Client configuration, fixed at build time.
//!
//! - `GROUPMATCH_API_URL`: backend origin, e.g. `http://localhost:8000`
//!   (default: empty, same-origin relative paths)
//! - `GROUPMATCH_TOAST_MS`: how long a notification stays up (default: 5000)

use std::time::Duration;

const DEFAULT_TOAST_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub notification_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::parse(option_env!("GROUPMATCH_API_URL"), option_env!("GROUPMATCH_TOAST_MS"))
    }

    fn parse(api_url: Option<&str>, toast_ms: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let toast_ms = toast_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TOAST_MS);

        Self {
            api_base_url,
            notification_timeout: Duration::from_millis(toast_ms),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::parse(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.notification_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn trims_base_url_and_ignores_bad_timeout() {
        let config = ClientConfig::parse(Some("http://localhost:8000/ "), Some("soon"));
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.notification_timeout, Duration::from_millis(5000));

        let config = ClientConfig::parse(None, Some("1500"));
        assert_eq!(config.notification_timeout, Duration::from_millis(1500));
    }
}
