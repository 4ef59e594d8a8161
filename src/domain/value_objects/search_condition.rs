use serde::{Deserialize, Serialize};

/// Label filter: a single label or "any of" several labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagFilter {
    Single(String),
    Any(Vec<String>),
}

impl TagFilter {
    fn normalized(self) -> Option<Self> {
        match self {
            TagFilter::Single(label) => {
                let label = label.trim();
                if label.is_empty() {
                    None
                } else {
                    Some(TagFilter::Single(label.to_string()))
                }
            }
            TagFilter::Any(labels) => Some(TagFilter::Any(labels)),
        }
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        TagFilter::Single(value.to_string())
    }
}

impl From<Vec<String>> for TagFilter {
    fn from(values: Vec<String>) -> Self {
        TagFilter::Any(values)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recency {
    Day,
    Week,
    Month,
    Hot,
}

/// Period picked in the "Hottest Posts" header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotPeriod {
    Day,
    #[default]
    Week,
    Month,
}

impl HotPeriod {
    pub fn label(self) -> &'static str {
        match self {
            HotPeriod::Day => "Last 24 hours",
            HotPeriod::Week => "Last week",
            HotPeriod::Month => "Last month",
        }
    }

    pub fn all() -> [HotPeriod; 3] {
        [HotPeriod::Day, HotPeriod::Week, HotPeriod::Month]
    }
}

/// Snapshot of the filters currently applied to the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchCondition {
    pub author: Option<String>,
    pub term: Option<String>,
    pub tag: Option<TagFilter>,
    pub recency: Option<Recency>,
}

impl SearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = non_empty(term.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<TagFilter>) -> Self {
        self.tag = tag.into().normalized();
        self
    }

    pub fn with_recency(mut self, recency: Recency) -> Self {
        self.recency = Some(recency);
        self
    }

    /// Empty strings count as "not set".
    pub fn normalized(self) -> Self {
        Self {
            author: self.author.and_then(non_empty),
            term: self.term.and_then(non_empty),
            tag: self.tag.and_then(TagFilter::normalized),
            recency: self.recency,
        }
    }

    pub fn has_changed(current: &SearchCondition, previous: Option<&SearchCondition>) -> bool {
        match previous {
            None => true,
            Some(previous) => {
                current.author != previous.author
                    || current.term != previous.term
                    || current.tag != previous.tag
                    || current.recency != previous.recency
            }
        }
    }

    pub fn is_hot(&self) -> bool {
        self.recency == Some(Recency::Hot)
    }

    /// Whether any user-facing search filter (author, term or tag) is active.
    pub fn is_search(&self) -> bool {
        self.author.is_some() || self.term.is_some() || self.tag.is_some()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
