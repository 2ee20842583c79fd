use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of entities per page in list responses.
    pub page_size: usize,
    /// Base origin used to qualify generated links. When unset, links are
    /// derived from the inbound request instead.
    pub base_url: Option<String>,
    /// Directory holding the static JSON collections.
    pub data_dir: String,
}

impl AppConfig {
    const DEFAULT_PAGE_SIZE: usize = 20;

    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            page_size: env::var("DATA_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(Self::DEFAULT_PAGE_SIZE),
            base_url: env::var("DNS")
                .ok()
                .map(|dns| dns.trim_end_matches('/').to_string())
                .filter(|dns| !dns.is_empty()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            page_size: Self::DEFAULT_PAGE_SIZE,
            base_url: None,
            data_dir: "data".to_string(),
        }
    }
}
