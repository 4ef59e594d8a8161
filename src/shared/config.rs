use crate::domain::value_objects::OrderDirection;
use crate::shared::error::{FeedError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUERY_NAME: &str = "bo_near_devhub_v36_posts_with_latest_snapshot";
pub const DEFAULT_ENDPOINT: &str = "https://near-queryapi.api.pagoda.co/v1/graphql/";
pub const DEFAULT_LOAD_MORE_TEXT: &str = "Load more...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// 最初に表示する件数
    pub initial_render_limit: usize,
    /// 追加読み込み一回あたりの件数 (未指定なら initial_render_limit)
    pub next_limit: Option<usize>,
    /// true の場合は無限スクロールではなく "Load more" リンクで追加読み込み
    pub manual: bool,
    pub load_more_text: String,
    pub query_name: String,
    pub endpoint: String,
    pub query_limit: usize,
    /// カーソルによる先読み (バックエンドのカーソル仕様が確定するまで既定で無効)
    pub fetch_ahead: bool,
    pub order: OrderDirection,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            initial_render_limit: 3,
            next_limit: None,
            manual: false,
            load_more_text: DEFAULT_LOAD_MORE_TEXT.to_string(),
            query_name: DEFAULT_QUERY_NAME.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            query_limit: 100,
            fetch_ahead: false,
            order: OrderDirection::Desc,
        }
    }
}

impl FeedConfig {
    pub fn add_display_count(&self) -> usize {
        self.next_limit.unwrap_or(self.initial_render_limit)
    }

    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// 環境変数 (または任意のルックアップ) で既定値を上書きする
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) =
            lookup("DEVHUB_FEED_INITIAL_RENDER_LIMIT").and_then(|v| parse_usize(&v))
        {
            self.initial_render_limit = value.max(1);
        }
        if let Some(value) = lookup("DEVHUB_FEED_NEXT_LIMIT").and_then(|v| parse_usize(&v)) {
            self.next_limit = if value == 0 { None } else { Some(value) };
        }
        if let Some(v) = lookup("DEVHUB_FEED_MANUAL") {
            self.manual = parse_bool(&v, self.manual);
        }
        if let Some(v) = lookup("DEVHUB_FEED_LOAD_MORE_TEXT") {
            let text = v.trim();
            if !text.is_empty() {
                self.load_more_text = text.to_string();
            }
        }
        if let Some(v) = lookup("DEVHUB_FEED_QUERY_NAME") {
            let name = v.trim();
            if !name.is_empty() {
                self.query_name = name.to_string();
            }
        }
        if let Some(v) = lookup("DEVHUB_FEED_ENDPOINT") {
            let endpoint = v.trim();
            if !endpoint.is_empty() {
                self.endpoint = endpoint.to_string();
            }
        }
        if let Some(value) = lookup("DEVHUB_FEED_QUERY_LIMIT").and_then(|v| parse_usize(&v)) {
            self.query_limit = value.max(1);
        }
        if let Some(v) = lookup("DEVHUB_FEED_FETCH_AHEAD") {
            self.fetch_ahead = parse_bool(&v, self.fetch_ahead);
        }
        if let Some(v) = lookup("DEVHUB_FEED_ORDER") {
            match v.trim().to_ascii_lowercase().as_str() {
                "asc" => self.order = OrderDirection::Asc,
                "desc" => self.order = OrderDirection::Desc,
                _ => {}
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_render_limit == 0 {
            return Err(FeedError::Configuration(
                "initial_render_limit must be greater than 0".to_string(),
            ));
        }
        if self.next_limit == Some(0) {
            return Err(FeedError::Configuration(
                "next_limit must be greater than 0".to_string(),
            ));
        }
        if self.query_limit == 0 {
            return Err(FeedError::Configuration(
                "query_limit must be greater than 0".to_string(),
            ));
        }
        if self.query_name.trim().is_empty() {
            return Err(FeedError::Configuration(
                "query_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}
