//! Render-ready mapping handed to the template engine.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Well-known view model keys shared by services and templates.
pub mod keys {
    pub const HOT_ARTICLES: &str = "hot_articles";
    pub const PERFECT_ARTICLES: &str = "perfect_articles";
    pub const TIMELINES: &str = "timelines";
    pub const LATEST_ARTICLES: &str = "latest_articles";
    pub const INDEX_ARTICLES: &str = "index_articles";
    pub const ARTICLE_STICK_CHECK: &str = "article_stick_check";

    pub const PAGINATION_CURRENT_PAGE_NUM: &str = "pagination_current_page_num";
    pub const PAGINATION_PAGE_COUNT: &str = "pagination_page_count";
    pub const PAGINATION_PAGE_NUMS: &str = "pagination_page_nums";
    pub const PAGINATION_FIRST_PAGE_NUM: &str = "pagination_first_page_num";
    pub const PAGINATION_LAST_PAGE_NUM: &str = "pagination_last_page_num";

    pub const RANDOM_ARTICLES: &str = "random_articles";
    pub const SIDE_HOT_ARTICLES: &str = "side_hot_articles";
    pub const SIDE_TAGS: &str = "side_tags";
    pub const LATEST_COMMENTS: &str = "latest_comments";
    pub const INDEX_TAGS: &str = "index_tags";
    pub const DOMAINS: &str = "domains";

    pub const IS_LOGGED_IN: &str = "is_logged_in";
    pub const CURRENT_USER: &str = "current_user";
    pub const IS_MOBILE: &str = "is_mobile";
    pub const AVATAR_VIEW_MODE: &str = "avatar_view_mode";
    pub const SITE_NAME: &str = "site_name";
    pub const STATIC_RESOURCE_VERSION: &str = "static_resource_version";
    pub const MINI_POSTFIX: &str = "mini_postfix";

    pub const RUNTIME_MODE: &str = "runtime_mode";
    pub const RUNTIME_VERSION: &str = "runtime_version";
    pub const RUNTIME_DATABASE: &str = "runtime_database";
}

/// String-keyed mapping of heterogeneous values built once per request.
///
/// Services fill it through `&mut` while assembling; once returned it is only
/// read by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewModel(Map<String, Value>);

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `value` and stores it under `key`, replacing any previous
    /// entry.
    pub fn insert<T>(&mut self, key: &str, value: &T) -> Result<(), serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(value)?;
        self.0.insert(key.to_string(), value);
        Ok(())
    }

    /// Merges a flat string table, e.g. a language table, into the model.
    pub fn extend_strings(&mut self, strings: BTreeMap<String, String>) {
        self.0.extend(
            strings
                .into_iter()
                .map(|(key, value)| (key, Value::String(value))),
        );
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}
