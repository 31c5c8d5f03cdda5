use shared_types::{AppConfig, ClientConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at compile time so the
/// web build needs no filesystem.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the bundled defaults. A broken file falls back to built-in
/// defaults rather than stopping the app.
pub fn bundled_config() -> AppConfig {
    toml::from_str(BUNDLED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.toml could not be parsed; using defaults");
        AppConfig::default()
    })
}

/// Apply overrides on top of `base`. Blank values are ignored.
pub fn apply_overrides(
    mut base: AppConfig,
    base_url: Option<String>,
    storage_url: Option<String>,
) -> AppConfig {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        base.api.base_url = url.trim().to_string();
    }
    if let Some(url) = storage_url.filter(|u| !u.trim().is_empty()) {
        base.api.storage_url = Some(url.trim().to_string());
    }
    base
}

fn resolve() -> ClientConfig {
    let mut config = apply_overrides(
        bundled_config(),
        option_env!("API_BASE_URL").map(str::to_string),
        option_env!("STORAGE_URL").map(str::to_string),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dotenvy::dotenv();
        config = apply_overrides(
            config,
            std::env::var("API_BASE_URL").ok(),
            std::env::var("STORAGE_URL").ok(),
        );
    }

    let client: ClientConfig = config.into();
    tracing::info!(
        api_base_url = %client.api_base_url,
        storage_url = %client.storage_url,
        "client configuration loaded"
    );
    client
}

/// Resolve the configuration once and cache it. Safe to call repeatedly.
pub fn load_client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(resolve)
}
