//! Configuration model loaded from external sources.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::Locale;

/// Deployment flavour reported to templates.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings consumed while assembling listing pages.
pub struct PageSettings {
    /// Listing page size used when the member has no preference.
    #[validate(range(min = 1))]
    pub default_page_size: usize,
    /// Number of page links shown around the current page.
    #[validate(range(min = 1))]
    pub pagination_window_size: usize,
    #[validate(range(min = 1))]
    pub index_hot_articles_cnt: usize,
    #[validate(range(min = 1))]
    pub index_perfect_articles_cnt: usize,
    #[validate(range(min = 1))]
    pub index_tags_cnt: usize,
    #[validate(range(min = 1))]
    pub side_random_articles_cnt: usize,
    #[validate(range(min = 1))]
    pub side_hot_articles_cnt: usize,
    #[validate(range(min = 1))]
    pub side_tags_cnt: usize,
    #[validate(range(min = 1))]
    pub side_latest_comments_cnt: usize,
    #[validate(length(min = 1))]
    pub site_name: String,
    pub static_resource_version: String,
    #[serde(default)]
    pub runtime_mode: RuntimeMode,
    /// Serve `.min` assets even outside production.
    #[serde(default)]
    pub minified: bool,
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// JSON file feeding the in-memory data source.
    pub seed_path: String,
    #[validate(length(min = 64))]
    pub secret: String,
    /// Language table used when the visitor's locale has none.
    pub default_locale: Locale,
    #[validate(nested)]
    pub pages: PageSettings,
}
