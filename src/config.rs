use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "MOVIEREC_";

/// Settings read from `MOVIEREC_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Root of the recommendation service; `/recommend` is resolved below it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Capture the mouse so the Recommend button can be clicked.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mouse: default_mouse(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Config = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.base_url()?;
        Ok(config)
    }

    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = Config::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert!(config.mouse);
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("MOVIEREC_BASE_URL", "https://recs.example.com/api"),
            ("MOVIEREC_MOUSE", "false"),
        ]))
        .unwrap();
        assert_eq!(config.base_url().unwrap().host_str(), Some("recs.example.com"));
        assert!(!config.mouse);
    }

    #[test]
    fn rejects_unusable_base_url() {
        let err = Config::from_vars(vars(&[("MOVIEREC_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err =
            Config::from_vars(vars(&[("MOVIEREC_BASE_URL", "ftp://example.com")])).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn rejects_malformed_flag() {
        let err = Config::from_vars(vars(&[("MOVIEREC_MOUSE", "sometimes")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }
}
