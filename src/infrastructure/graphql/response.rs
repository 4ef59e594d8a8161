use crate::application::ports::QueryPage;
use crate::domain::value_objects::ItemId;
use crate::shared::{FeedError, Result};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct PostRow {
    post_id: PostIdValue,
}

/// Indexers return `post_id` as a number; string ids are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostIdValue {
    Number(u64),
    Text(String),
}

impl From<PostIdValue> for ItemId {
    fn from(value: PostIdValue) -> Self {
        match value {
            PostIdValue::Number(id) => ItemId::from(id),
            PostIdValue::Text(id) => ItemId::from(id),
        }
    }
}

/// Maps a GraphQL response to the ordered ids under `data[query_name]`.
pub fn decode_page(query_name: &str, status: u16, body: &Value) -> Result<QueryPage> {
    if status != 200 {
        return Err(FeedError::query_failed(status, body.to_string()));
    }

    let data = match body.get("data") {
        Some(data) if !data.is_null() => data,
        _ => {
            let reason = body
                .get("errors")
                .map(|errors| format!("response has no data: {errors}"))
                .unwrap_or_else(|| "response has no data".to_string());
            return Err(FeedError::MalformedResponse(reason));
        }
    };

    let rows = data
        .get(query_name)
        .cloned()
        .ok_or_else(|| FeedError::MalformedResponse(format!("missing field `{query_name}`")))?;
    let rows: Vec<PostRow> = serde_json::from_value(rows)
        .map_err(|e| FeedError::MalformedResponse(e.to_string()))?;

    Ok(QueryPage::new(
        rows.into_iter().map(|row| ItemId::from(row.post_id)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: &str = "posts";

    #[test]
    fn decodes_ids_in_response_order() {
        let body = json!({ "data": { "posts": [{ "post_id": 12 }, { "post_id": "7" }] } });
        let page = decode_page(NAME, 200, &body).unwrap();
        assert_eq!(page.items, vec![ItemId::from(12u64), ItemId::from(7u64)]);
    }

    #[test]
    fn non_success_status_is_query_failure() {
        let body = json!({ "error": "rate limited" });
        match decode_page(NAME, 429, &body) {
            Err(FeedError::QueryFailed { status, body }) => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limited"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_malformed() {
        let body = json!({ "errors": [{ "message": "field not found" }] });
        assert!(matches!(
            decode_page(NAME, 200, &body),
            Err(FeedError::MalformedResponse(reason)) if reason.contains("field not found")
        ));
        assert!(matches!(
            decode_page(NAME, 200, &json!({ "data": null })),
            Err(FeedError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_result_is_an_empty_page() {
        let body = json!({ "data": { "posts": [] } });
        assert!(decode_page(NAME, 200, &body).unwrap().items.is_empty());
    }

    #[test]
    fn rows_without_post_id_are_malformed() {
        let body = json!({ "data": { "posts": [{ "id": 1 }] } });
        assert!(matches!(
            decode_page(NAME, 200, &body),
            Err(FeedError::MalformedResponse(_))
        ));
    }
}
