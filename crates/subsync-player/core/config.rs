//! Player configuration
//!
//! Plain struct with defaults, optionally overridden from the environment.

use super::errors::{PlayerError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`PlayerConfig::api_base_url`]
pub const API_URL_ENV: &str = "SUBSYNC_API_URL";

/// Environment variable overriding [`PlayerConfig::seek_step_secs`]
pub const SEEK_STEP_ENV: &str = "SUBSYNC_SEEK_STEP";

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds moved by the left/right arrow shortcuts
    pub seek_step_secs: f64,

    /// Base URL of the lookup and vocabulary service
    pub api_base_url: String,

    /// Language the learner reads natively; lines in it are echoed, not translated
    pub native_lang_code: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: 5.0,
            api_base_url: "http://127.0.0.1:5000".to_string(),
            native_lang_code: "en".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Defaults overridden by `SUBSYNC_API_URL` and `SUBSYNC_SEEK_STEP`
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Config`] if a variable is set but invalid.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Config`] if a value is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.api_base_url = url;
        }
        if let Some(step) = lookup(SEEK_STEP_ENV) {
            config.seek_step_secs = step.trim().parse().map_err(|_| {
                PlayerError::Config(format!("{SEEK_STEP_ENV} is not a number: {step:?}"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Config`] for a non-positive seek step or an
    /// empty base URL.
    pub fn validate(&self) -> Result<()> {
        if !(self.seek_step_secs.is_finite() && self.seek_step_secs > 0.0) {
            return Err(PlayerError::Config(format!(
                "seek step must be positive, got {}",
                self.seek_step_secs
            )));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(PlayerError::Config("api base url is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.seek_step_secs, 5.0);
        assert_eq!(config.native_lang_code, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lookup_overrides() {
        let config = PlayerConfig::from_lookup(|key| match key {
            API_URL_ENV => Some("http://lookup.local/".to_string()),
            SEEK_STEP_ENV => Some(" 2.5 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.api_base_url, "http://lookup.local/");
        assert_eq!(config.seek_step_secs, 2.5);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_step = PlayerConfig::from_lookup(|key| {
            (key == SEEK_STEP_ENV).then(|| "fast".to_string())
        });
        assert!(matches!(bad_step, Err(PlayerError::Config(_))));

        let negative = PlayerConfig::from_lookup(|key| {
            (key == SEEK_STEP_ENV).then(|| "-1".to_string())
        });
        assert!(negative.is_err());
    }
}
