use crate::application::ports::{PostQuery, QueryPage, QueryTransport};
use crate::domain::entities::PostRecord;
use crate::domain::value_objects::{FetchCursor, OrderDirection};
use crate::shared::Result;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;

/// インメモリの投稿インデックス
///
/// GraphQL インデクサと同じフィルタ・並び順・カーソルの意味で検索する。
#[derive(Clone, Default)]
pub struct InMemoryPostIndex {
    posts: Arc<RwLock<Vec<PostRecord>>>,
}

impl InMemoryPostIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<PostRecord>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// 投稿を追加 (同じIDは上書き)
    pub async fn upsert(&self, post: PostRecord) {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.post_id == post.post_id) {
            Some(existing) => *existing = post,
            None => posts.push(post),
        }
    }

    pub async fn remove(&self, post_id: u64) -> bool {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.post_id != post_id);
        posts.len() != before
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

fn after_cursor(post: &PostRecord, cursor: &FetchCursor) -> bool {
    let Some(bound) = cursor.after.as_u64() else {
        return true;
    };
    match cursor.order {
        OrderDirection::Asc => post.post_id > bound,
        OrderDirection::Desc => post.post_id < bound,
    }
}

fn compare(a: &PostRecord, b: &PostRecord, order: OrderDirection) -> Ordering {
    let ascending = a.ts.cmp(&b.ts).then_with(|| a.post_id.cmp(&b.post_id));
    match order {
        OrderDirection::Asc => ascending,
        OrderDirection::Desc => ascending.reverse(),
    }
}

#[async_trait]
impl QueryTransport for InMemoryPostIndex {
    async fn fetch(&self, query: &PostQuery) -> Result<QueryPage> {
        let posts = self.posts.read().await;
        let mut matched: Vec<&PostRecord> = posts
            .iter()
            .filter(|post| query.filter.matches(post))
            .filter(|post| query.cursor.as_ref().map_or(true, |c| after_cursor(post, c)))
            .collect();
        matched.sort_by(|a, b| compare(a, b, query.order_by));

        let items = matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .map(PostRecord::item_id)
            .collect();
        Ok(QueryPage::new(items))
    }
}
