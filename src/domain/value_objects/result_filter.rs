use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::domain::entities::PostRecord;

/// One clause of a posts filter. A `ResultFilter` is the conjunction of its
/// clauses; `Not` negates the conjunction of its inner clauses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    AuthorEq(String),
    /// `%`-wildcard pattern, case-insensitive.
    DescriptionILike(String),
    LabelsContain(String),
    LabelsContainAny(Vec<String>),
    ParentIsNull,
    PostTypeEq(String),
    Not(Vec<Predicate>),
}

impl Predicate {
    fn field(&self) -> Option<(&'static str, Value)> {
        match self {
            Predicate::AuthorEq(author) => Some(("author_id", json!({ "_eq": author }))),
            Predicate::DescriptionILike(pattern) => {
                Some(("description", json!({ "_ilike": pattern })))
            }
            Predicate::LabelsContain(label) => Some(("labels", json!({ "_contains": label }))),
            Predicate::LabelsContainAny(labels) => {
                Some(("labels", json!({ "_containsAny": labels })))
            }
            Predicate::ParentIsNull => Some(("parent_id", json!({ "_is_null": true }))),
            Predicate::PostTypeEq(post_type) => Some(("post_type", json!({ "_eq": post_type }))),
            Predicate::Not(_) => None,
        }
    }

    pub fn matches(&self, post: &PostRecord) -> bool {
        match self {
            Predicate::AuthorEq(author) => &post.author_id == author,
            Predicate::DescriptionILike(pattern) => ilike(&post.description, pattern),
            Predicate::LabelsContain(label) => post.has_label(label),
            Predicate::LabelsContainAny(labels) => labels.iter().any(|l| post.has_label(l)),
            Predicate::ParentIsNull => post.is_top_level(),
            Predicate::PostTypeEq(post_type) => &post.post_type == post_type,
            Predicate::Not(inner) => !inner.iter().all(|p| p.matches(post)),
        }
    }
}

/// Filter for the posts query, kept as typed clauses so it can be rendered to
/// the backend's `where` expression or evaluated in-process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultFilter {
    clauses: Vec<Predicate>,
}

impl ResultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, clause: Predicate) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Predicate] {
        &self.clauses
    }

    pub fn contains(&self, clause: &Predicate) -> bool {
        self.clauses.contains(clause)
    }

    pub fn matches(&self, post: &PostRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(post))
    }

    /// Hasura-style `where` object. Field clauses become top-level keys and
    /// negations are collected under `_and`.
    pub fn to_where(&self) -> Value {
        let (mut object, and) = object_of(&self.clauses);
        if !and.is_empty() {
            object.insert("_and".to_string(), Value::Array(and));
        }
        Value::Object(object)
    }
}

fn object_of(clauses: &[Predicate]) -> (Map<String, Value>, Vec<Value>) {
    let mut object = Map::new();
    let mut and = Vec::new();
    for clause in clauses {
        match clause {
            Predicate::Not(inner) => {
                let (mut negated, nested_and) = object_of(inner);
                if !nested_and.is_empty() {
                    negated.insert("_and".to_string(), Value::Array(nested_and));
                }
                and.push(json!({ "_not": Value::Object(negated) }));
            }
            other => {
                if let Some((key, value)) = other.field() {
                    if object.contains_key(key) {
                        let mut single = Map::new();
                        single.insert(key.to_string(), value);
                        and.push(Value::Object(single));
                    } else {
                        object.insert(key.to_string(), value);
                    }
                }
            }
        }
    }
    (object, and)
}

/// SQL `ILIKE`: `%` matches any run of characters, `_` exactly one.
fn ilike(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

    let (mut t, mut p) = (0, 0);
    // Last `%` seen and the text position it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;
    while t < text.len() {
        match pattern.get(p).copied() {
            Some('%') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(c) if c == '_' || c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, t));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post() -> PostRecord {
        PostRecord::new(1, "alice.near", Utc::now())
            .with_description("A Wiki page about funding")
            .with_labels(["wiki", "funding"])
    }

    #[test]
    fn ilike_is_case_insensitive_substring() {
        assert!(ilike("A Wiki page", "%wiki%"));
        assert!(ilike("wiki", "%WIKI%"));
        assert!(!ilike("A page", "%wiki%"));
        assert!(ilike("prefix-rest", "prefix%"));
        assert!(!ilike("rest-prefix", "prefix%"));
        assert!(ilike("exact", "EXACT"));
    }

    #[test]
    fn ilike_underscore_matches_one_character() {
        assert!(ilike("xxABCyy", "%a_c%"));
        assert!(!ilike("ac", "%a_c%"));
        assert!(ilike("abc", "a_c"));
        assert!(!ilike("abbc", "a_c"));
        assert!(ilike("grant_report", "%t_r%"));
        assert!(ilike("", "%"));
        assert!(!ilike("", "_"));
    }

    #[test]
    fn not_negates_the_conjunction() {
        let clause = Predicate::Not(vec![
            Predicate::LabelsContain("wiki".to_string()),
            Predicate::ParentIsNull,
        ]);
        assert!(!clause.matches(&post()));
        assert!(clause.matches(&post().with_parent(7)));
    }

    #[test]
    fn where_object_groups_negations_under_and() {
        let mut filter = ResultFilter::new();
        filter.push(Predicate::AuthorEq("alice.near".to_string()));
        filter.push(Predicate::Not(vec![Predicate::LabelsContain(
            "devhub-test".to_string(),
        )]));

        assert_eq!(
            filter.to_where(),
            json!({
                "author_id": { "_eq": "alice.near" },
                "_and": [
                    { "_not": { "labels": { "_contains": "devhub-test" } } }
                ]
            })
        );
    }

    #[test]
    fn duplicate_field_clauses_are_kept() {
        let mut filter = ResultFilter::new();
        filter.push(Predicate::LabelsContain("a".to_string()));
        filter.push(Predicate::LabelsContain("b".to_string()));
        let rendered = filter.to_where();
        assert_eq!(rendered["labels"], json!({ "_contains": "a" }));
        assert_eq!(rendered["_and"], json!([{ "labels": { "_contains": "b" } }]));
    }
}
