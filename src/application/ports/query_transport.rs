use crate::domain::value_objects::{FetchCursor, ItemId, OrderDirection, ResultFilter};
use crate::shared::Result;
use async_trait::async_trait;

pub const DEFAULT_QUERY_LIMIT: usize = 100;

/// Paged posts query: filter, page window and ordering by timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub filter: ResultFilter,
    pub limit: usize,
    pub offset: usize,
    pub order_by: OrderDirection,
    pub cursor: Option<FetchCursor>,
}

impl PostQuery {
    pub fn new(filter: ResultFilter) -> Self {
        Self {
            filter,
            limit: DEFAULT_QUERY_LIMIT,
            offset: 0,
            order_by: OrderDirection::Desc,
            cursor: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_order(mut self, order_by: OrderDirection) -> Self {
        self.order_by = order_by;
        self
    }

    /// Follow-up page starting after `cursor`.
    pub fn resume_from(&self, cursor: FetchCursor, limit: usize) -> Self {
        Self {
            filter: self.filter.clone(),
            limit,
            offset: 0,
            order_by: cursor.order,
            cursor: Some(cursor),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPage {
    pub items: Vec<ItemId>,
}

impl QueryPage {
    pub fn new(items: Vec<ItemId>) -> Self {
        Self { items }
    }
}

/// Executes posts queries against the backend index.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn fetch(&self, query: &PostQuery) -> Result<QueryPage>;
}
