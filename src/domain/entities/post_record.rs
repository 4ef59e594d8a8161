use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

pub const POST_TYPE_COMMENT: &str = "Comment";

/// Row of the "posts with latest snapshot" index that the feed queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub post_id: u64,
    pub author_id: String,
    pub description: String,
    pub labels: Vec<String>,
    pub parent_id: Option<u64>,
    pub post_type: String,
    pub ts: DateTime<Utc>,
}

impl PostRecord {
    pub fn new(post_id: u64, author_id: impl Into<String>, ts: DateTime<Utc>) -> Self {
        Self {
            post_id,
            author_id: author_id.into(),
            description: String::new(),
            labels: Vec::new(),
            parent_id: None,
            post_type: "Idea".to_string(),
            ts,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn item_id(&self) -> ItemId {
        ItemId::from(self.post_id)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
