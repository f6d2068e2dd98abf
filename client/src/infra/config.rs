use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const BASE_URL_VAR: &str = "MEDIA_API_BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Reads MEDIA_API_BASE_URL, falling back to the local dev server.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self::with_base_url(&raw)
    }

    /// Validates and normalises a base URL. Trailing slashes are dropped so
    /// that `base_url + "/api/..."` never produces a double slash. A query or
    /// fragment is rejected since every endpoint path is appended after it.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: "query strings and fragments are not allowed".into(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".into())).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_reads_variable_and_trims_slash() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_VAR).then(|| "https://media.example.com/".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url, "https://media.example.com");
    }

    #[test]
    fn test_keeps_path_prefix() {
        let config = ClientConfig::with_base_url("http://host:8080/gallery/").unwrap();
        assert_eq!(config.base_url, "http://host:8080/gallery");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ClientConfig::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::with_base_url("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        for raw in [
            "http://h:1/?x=1",
            "http://h:1?",
            "http://h:1/#frag",
            "https://media.example.com/base#",
        ] {
            let err = ClientConfig::with_base_url(raw).unwrap_err();
            assert!(
                err.to_string().contains("query strings and fragments"),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn test_env_value_with_query_is_an_error() {
        let result = ClientConfig::from_lookup(|_| Some("http://localhost:3001/?debug=1".into()));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
