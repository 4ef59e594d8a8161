use crate::domain::value_objects::{HotPeriod, SearchCondition};
use serde::Serialize;
use std::sync::Arc;

pub const HOT_TITLE: &str = "Hottest Posts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedHeader {
    pub title: &'static str,
    pub period: HotPeriod,
    pub period_label: &'static str,
    pub period_options: Vec<(HotPeriod, &'static str)>,
}

impl FeedHeader {
    pub fn hot(period: HotPeriod) -> Self {
        Self {
            title: HOT_TITLE,
            period,
            period_label: period.label(),
            period_options: HotPeriod::all().iter().map(|p| (*p, p.label())).collect(),
        }
    }
}

/// Control shown under the list in manual mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadMoreControl {
    Loader,
    Link { text: String },
}

#[derive(Debug)]
pub enum FeedBody<A> {
    /// No list has been received yet.
    Loading,
    Empty {
        message: String,
    },
    Items {
        items: Vec<Arc<A>>,
        has_more: bool,
        load_more: Option<LoadMoreControl>,
    },
}

#[derive(Debug)]
pub struct FeedView<A> {
    pub header: Option<FeedHeader>,
    pub is_loading: bool,
    pub body: FeedBody<A>,
}

impl<A> FeedView<A> {
    pub fn visible_items(&self) -> &[Arc<A>] {
        match &self.body {
            FeedBody::Items { items, .. } => items,
            _ => &[],
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self.body, FeedBody::Items { has_more: true, .. })
    }

    pub fn empty_message(&self) -> Option<&str> {
        match &self.body {
            FeedBody::Empty { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_waiting_for_first_result(&self) -> bool {
        matches!(self.body, FeedBody::Loading)
    }
}

/// "No posts", qualified by the active search and the hot period.
pub fn empty_state_message(condition: &SearchCondition, period: HotPeriod) -> String {
    let mut message = String::from("No posts");
    if condition.is_search() {
        message.push_str(" matches search");
    }
    if condition.is_hot() {
        message.push_str(" in ");
        message.push_str(&period.label().to_lowercase());
    }
    message
}
