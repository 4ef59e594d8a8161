use crate::application::ports::PostQuery;
use crate::domain::value_objects::{FetchCursor, ItemId, OrderDirection};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const OPERATION_NAME: &str = "DevhubPostsQuery";
pub const HASURA_ROLE_HEADER: (&str, &str) = ("x-hasura-role", "bo_near");

/// POST body sent to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
    pub operation_name: String,
}

pub fn query_document(query_name: &str, order: OrderDirection) -> String {
    let order = match order {
        OrderDirection::Asc => "asc",
        OrderDirection::Desc => "desc",
    };
    format!(
        "query {OPERATION_NAME}($limit: Int = 100, $offset: Int = 0, $where: {query_name}_bool_exp = {{}}) {{\n  \
         {query_name}(\n    limit: $limit\n    offset: $offset\n    order_by: {{ts: {order}}}\n    where: $where\n  ) {{\n    post_id\n  }}\n}}\n"
    )
}

pub fn build_request(query_name: &str, query: &PostQuery) -> GraphqlRequest {
    let mut filter = match query.filter.to_where() {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    if let Some(cursor) = &query.cursor {
        push_cursor_clause(&mut filter, cursor);
    }

    GraphqlRequest {
        query: query_document(query_name, query.order_by),
        variables: json!({
            "limit": query.limit,
            "offset": query.offset,
            "where": Value::Object(filter),
        }),
        operation_name: OPERATION_NAME.to_string(),
    }
}

/// Restricts the page to posts strictly after the cursor in list order.
fn push_cursor_clause(filter: &mut Map<String, Value>, cursor: &FetchCursor) {
    let op = match cursor.order {
        OrderDirection::Asc => "_gt",
        OrderDirection::Desc => "_lt",
    };
    let clause = json!({ op: id_value(&cursor.after) });

    if filter.contains_key("post_id") {
        let and = filter
            .entry("_and")
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(and) = and {
            and.push(json!({ "post_id": clause }));
        }
    } else {
        filter.insert("post_id".to_string(), clause);
    }
}

fn id_value(id: &ItemId) -> Value {
    match id.as_u64() {
        Some(number) => Value::from(number),
        None => Value::from(id.as_str()),
    }
}
