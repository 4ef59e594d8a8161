use crate::application::ports::PostQuery;
use crate::application::ports::query_transport::DEFAULT_QUERY_LIMIT;
use crate::domain::entities::POST_TYPE_COMMENT;
use crate::domain::value_objects::{
    OrderDirection, Predicate, ResultFilter, SearchCondition, TagFilter,
};

pub const BLOG_LABEL: &str = "blog";
pub const TEST_LABEL: &str = "devhub-test";

/// Turns a `SearchCondition` into the posts filter.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    limit: usize,
    order: OrderDirection,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            limit: DEFAULT_QUERY_LIMIT,
            order: OrderDirection::Desc,
        }
    }
}

impl QueryBuilder {
    pub fn new(limit: usize, order: OrderDirection) -> Self {
        Self { limit, order }
    }

    /// Builds the filter. `tag_override` (a label clicked inside the list)
    /// replaces `condition.tag`.
    pub fn build(condition: &SearchCondition, tag_override: Option<&TagFilter>) -> ResultFilter {
        let mut filter = ResultFilter::new();

        if let Some(author) = &condition.author {
            filter.push(Predicate::AuthorEq(author.clone()));
        }
        if let Some(term) = &condition.term {
            filter.push(Predicate::DescriptionILike(format!("%{term}%")));
        }
        match tag_override.or(condition.tag.as_ref()) {
            Some(TagFilter::Single(label)) => filter.push(Predicate::LabelsContain(label.clone())),
            Some(TagFilter::Any(labels)) => {
                filter.push(Predicate::LabelsContainAny(labels.clone()))
            }
            None => {}
        }
        if condition.recency.is_none() {
            filter.push(Predicate::ParentIsNull);
        }
        for clause in Self::exclusion_clauses() {
            filter.push(clause);
        }

        filter
    }

    /// Clauses present in every filter: top-level blog comments and test posts
    /// are never listed.
    pub fn exclusion_clauses() -> [Predicate; 2] {
        [
            Predicate::Not(vec![
                Predicate::LabelsContain(BLOG_LABEL.to_string()),
                Predicate::ParentIsNull,
                Predicate::PostTypeEq(POST_TYPE_COMMENT.to_string()),
            ]),
            Predicate::Not(vec![Predicate::LabelsContain(TEST_LABEL.to_string())]),
        ]
    }

    pub fn query(&self, condition: &SearchCondition, tag_override: Option<&TagFilter>) -> PostQuery {
        PostQuery::new(Self::build(condition, tag_override))
            .with_limit(self.limit)
            .with_order(self.order)
    }
}
