use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::{Mutex, RwLock};

use devhub_feed::infrastructure::memory::InMemoryPostIndex;
use devhub_feed::{FeedError, PostQuery, QueryPage, QueryTransport};

mock! {
    pub Transport {}

    #[async_trait]
    impl QueryTransport for Transport {
        async fn fetch(&self, query: &PostQuery) -> Result<QueryPage, FeedError>;
    }
}

/// Wraps an in-memory index, records every query and can be switched into a
/// failing backend.
#[derive(Clone)]
pub struct RecordingTransport {
    index: InMemoryPostIndex,
    queries: Arc<Mutex<Vec<PostQuery>>>,
    failing: Arc<RwLock<Option<u16>>>,
}

impl RecordingTransport {
    pub fn new(index: InMemoryPostIndex) -> Self {
        Self {
            index,
            queries: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn fail_with(&self, status: u16) {
        *self.failing.write().await = Some(status);
    }

    pub async fn recover(&self) {
        *self.failing.write().await = None;
    }

    pub async fn queries(&self) -> Vec<PostQuery> {
        self.queries.lock().await.clone()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.lock().await.len()
    }
}

#[async_trait]
impl QueryTransport for RecordingTransport {
    async fn fetch(&self, query: &PostQuery) -> Result<QueryPage, FeedError> {
        self.queries.lock().await.push(query.clone());
        if let Some(status) = *self.failing.read().await {
            return Err(FeedError::query_failed(status, "backend unavailable"));
        }
        self.index.fetch(query).await
    }
}
