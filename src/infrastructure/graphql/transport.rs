use super::request::{build_request, GraphqlRequest, HASURA_ROLE_HEADER};
use super::response::decode_page;
use crate::application::ports::{PostQuery, QueryPage, QueryTransport};
use crate::shared::{FeedConfig, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlResponse {
    pub status: u16,
    pub body: Value,
}

/// HTTP side of the GraphQL adapter. Transport-level failures (no response at
/// all) are reported as `FeedError::Transport`.
#[async_trait]
pub trait GraphqlClient: Send + Sync {
    async fn post(
        &self,
        endpoint: &str,
        headers: &[(&str, &str)],
        body: &GraphqlRequest,
    ) -> Result<GraphqlResponse>;
}

/// `QueryTransport` backed by the indexer's GraphQL endpoint.
pub struct GraphqlQueryTransport {
    client: Arc<dyn GraphqlClient>,
    endpoint: String,
    query_name: String,
}

impl GraphqlQueryTransport {
    pub fn new(client: Arc<dyn GraphqlClient>, config: &FeedConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            query_name: config.query_name.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query_name(&self) -> &str {
        &self.query_name
    }
}

#[async_trait]
impl QueryTransport for GraphqlQueryTransport {
    async fn fetch(&self, query: &PostQuery) -> Result<QueryPage> {
        let request = build_request(&self.query_name, query);
        tracing::debug!(
            target: "feed::query",
            endpoint = %self.endpoint,
            variables = %request.variables,
            "posting posts query"
        );

        let response = self
            .client
            .post(&self.endpoint, &[HASURA_ROLE_HEADER], &request)
            .await?;
        let page = decode_page(&self.query_name, response.status, &response.body);
        if let Err(err) = &page {
            tracing::error!(target: "feed::query", error = %err, "posts query failed");
        }
        page
    }
}
