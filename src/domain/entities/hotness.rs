use serde::{Deserialize, Serialize};

/// Engagement data the hot ranking needs for one post.
///
/// `id` doubles as an age proxy (ids grow with insertion order) and `comments`
/// holds the id-derived age of each comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotnessInput {
    pub id: f64,
    pub likes: Vec<String>,
    pub comments: Vec<f64>,
}

impl HotnessInput {
    pub fn new(id: f64) -> Self {
        Self {
            id,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_likes<I, S>(mut self, likes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.likes = likes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_like_count(self, count: usize) -> Self {
        self.with_likes((0..count).map(|i| format!("liker-{i}.near")))
    }

    pub fn with_comments(mut self, comments: Vec<f64>) -> Self {
        self.comments = comments;
        self
    }
}
