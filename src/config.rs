use std::env;

use tracing::{info, warn};

pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            base_url: load_origin("REVIEW_BASE_URL", "http://127.0.0.1:5000"),
        }
    }
}

/// Endpoints are joined as `{base}/login` etc; the origin is kept without
/// a trailing slash.
fn load_origin(key: &str, default: &str) -> String {
    let raw = match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            warn!("{key} is empty, using default: {default}");
            default.to_string()
        }
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    };

    raw.trim().trim_end_matches('/').to_string()
}
