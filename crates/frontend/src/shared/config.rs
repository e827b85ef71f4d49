use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default)]
    pub url: String,
}

/// Web SDK settings forwarded as-is to the identity bridge.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

/// Configuration embedded in the wasm bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| load_config(EMBEDDED_CONFIG, option_env!("SERVER_URL")));

/// Parse the embedded TOML and apply the build-time `SERVER_URL` override.
///
/// A malformed file is logged and replaced by an empty configuration.
pub fn load_config(raw: &str, server_override: Option<&str>) -> AppConfig {
    let mut config = match toml::from_str::<AppConfig>(raw) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded config.toml: {}", e);
            AppConfig {
                server: ServerConfig { url: String::new() },
                firebase: FirebaseConfig {
                    api_key: String::new(),
                    auth_domain: String::new(),
                    project_id: String::new(),
                    storage_bucket: String::new(),
                    messaging_sender_id: String::new(),
                    app_id: String::new(),
                },
            }
        }
    };
    if let Some(url) = server_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.server.url = url.to_string();
    }
    config.server.url = config.server.url.trim_end_matches('/').to_string();
    config
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}
