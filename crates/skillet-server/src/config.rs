use std::env;
use tracing::info;

const ADDR_KEY: &str = "SKILLET_ADDR";
const CORS_ORIGIN_KEY: &str = "SKILLET_CORS_ORIGIN";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "*";

/// Runtime configuration, loaded from the environment with logged defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the server binds to
    pub addr: String,
    /// Allowed CORS origin; `*` admits any origin without credentials
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: DEFAULT_ADDR.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Config {
            addr: load_or_default(ADDR_KEY, DEFAULT_ADDR),
            cors_origin: load_or_default(CORS_ORIGIN_KEY, DEFAULT_CORS_ORIGIN),
        }
    }
}

fn load_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}
