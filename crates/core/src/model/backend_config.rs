use thiserror::Error;
use url::Url;

/// Marker left in the URL when the backend address was never filled in.
pub const PLACEHOLDER_MARKER: &str = "your-render-backend-url-goes-here";

/// Validated location of the quiz backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

#[derive(Clone, Debug, Default)]
pub struct BackendConfigDraft {
    pub base_url: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("backend URL is not set")]
    MissingBaseUrl,
    #[error("backend URL is still the placeholder value")]
    PlaceholderBaseUrl,
    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl BackendConfigDraft {
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is blank, the placeholder, not http(s),
    /// or cannot be parsed.
    pub fn validate(self) -> Result<BackendConfig, ConfigError> {
        let raw = normalize_optional(self.base_url).ok_or(ConfigError::MissingBaseUrl)?;
        if raw.contains(PLACEHOLDER_MARKER) {
            return Err(ConfigError::PlaceholderBaseUrl);
        }
        let base_url =
            Url::parse(&raw).map_err(|err| ConfigError::InvalidBaseUrl(err.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }
        Ok(BackendConfig { base_url })
    }
}

impl BackendConfig {
    /// Absolute URL of an endpoint below the base, e.g. `generate_quiz`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
