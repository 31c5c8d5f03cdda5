use serde::{Deserialize, Serialize};

/// Top-level shape of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Where uploaded images and documents are served from. Defaults to
    /// `<base_url>/storage` when omitted.
    #[serde(default)]
    pub storage_url: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            storage_url: None,
        }
    }
}

/// Resolved endpoints the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, storage_url: Option<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        let storage_url = storage_url
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{api_base_url}/storage"));
        Self {
            api_base_url,
            storage_url,
        }
    }

    /// Full URL for an API path such as `/api/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Public URL for a stored file. Absolute URLs are returned untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.storage_url, path.trim_start_matches('/'))
        }
    }
}

impl From<AppConfig> for ClientConfig {
    fn from(config: AppConfig) -> Self {
        ClientConfig::new(config.api.base_url, config.api.storage_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        AppConfig::default().into()
    }
}
