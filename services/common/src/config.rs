//! Runtime configuration
//!
//! External configuration is read from the process environment once at
//! startup and passed into the services that need it, so the fetchers are
//! testable with injected values.

use std::env;

/// Environment variable holding the social-analytics API key
pub const SOCIAL_API_KEY_VAR: &str = "LUNARCRUSH_API_KEY";

/// Tracker runtime configuration
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// API key for the social-analytics provider; `None` degrades the
    /// social score to Unavailable instead of failing the render
    pub social_api_key: Option<String>,
}

impl TrackerConfig {
    /// Build the configuration from the process environment.
    ///
    /// A missing or blank key is not an error; the social fetch degrades
    /// gracefully.
    pub fn from_env() -> Self {
        Self::from_key(env::var(SOCIAL_API_KEY_VAR).ok())
    }

    /// Build the configuration from an explicit key value
    pub fn from_key(key: Option<String>) -> Self {
        Self {
            social_api_key: key.filter(|k| !k.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_key_is_treated_as_absent() {
        assert_eq!(TrackerConfig::from_key(Some("  ".to_string())).social_api_key, None);
        assert_eq!(TrackerConfig::from_key(Some(String::new())).social_api_key, None);
    }

    #[test]
    fn present_key_is_kept() {
        let config = TrackerConfig::from_key(Some("abc123".to_string()));
        assert_eq!(config.social_api_key.as_deref(), Some("abc123"));
    }
}
