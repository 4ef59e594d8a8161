use super::item_id::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

/// Boundary item of the last fetched page. A follow-up page resumes strictly
/// after it in the list's order direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchCursor {
    pub after: ItemId,
    pub order: OrderDirection,
}

impl FetchCursor {
    pub fn new(after: ItemId, order: OrderDirection) -> Self {
        Self { after, order }
    }

    /// Cursor for the page following `items`; `None` when the page was short,
    /// meaning the backend has nothing left.
    pub fn next(items: &[ItemId], limit: usize, order: OrderDirection) -> Option<Self> {
        if items.is_empty() || items.len() < limit {
            return None;
        }
        items.last().map(|last| Self::new(last.clone(), order))
    }
}

impl fmt::Display for FetchCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.order {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        };
        write!(f, "{}:{}", order, self.after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn short_page_has_no_next_cursor() {
        let items = vec![ItemId::from("3"), ItemId::from("2")];
        assert_eq!(FetchCursor::next(&items, 3, OrderDirection::Desc), None);
        assert_eq!(FetchCursor::next(&[], 0, OrderDirection::Desc), None);
    }

    #[test]
    fn full_page_points_at_last_item() {
        let items = vec![ItemId::from("9"), ItemId::from("8")];
        let cursor = FetchCursor::next(&items, 2, OrderDirection::Desc).expect("cursor");
        assert_eq!(cursor.after, ItemId::from("8"));
    }

    #[test]
    fn display_names_direction_and_boundary() {
        let cursor = FetchCursor::new(ItemId::from("42"), OrderDirection::Asc);
        assert_eq!(cursor.to_string(), "asc:42");
        assert_eq!(
            FetchCursor::new(ItemId::from("7"), OrderDirection::Desc).to_string(),
            "desc:7"
        );
    }

    #[test]
    fn cursors_are_distinct_per_direction() {
        let mut seen = HashSet::new();
        seen.insert(FetchCursor::new(ItemId::from("42"), OrderDirection::Asc));
        seen.insert(FetchCursor::new(ItemId::from("42"), OrderDirection::Desc));
        seen.insert(FetchCursor::new(ItemId::from("42"), OrderDirection::Asc));
        assert_eq!(seen.len(), 2);
    }
}
