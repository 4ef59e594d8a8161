use crate::application::ports::QueryPage;
use crate::domain::value_objects::{FetchCursor, ItemId, OrderDirection};
use crate::shared::Result;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    Idle,
    QueryInFlight,
    DisplayingPartial,
    FetchingMore,
}

/// Ticket for a follow-up fetch. A result is applied only while its ticket
/// still matches the current list and the pending cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub list_generation: u64,
    pub cursor: FetchCursor,
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Merged { added: usize },
    Failed,
    StaleDiscarded,
}

/// Visible-prefix bookkeeping for one feed.
#[derive(Debug, Clone)]
pub struct PaginationController {
    state: PaginationState,
    items: Option<Vec<ItemId>>,
    display_count: usize,
    initial_render_limit: usize,
    add_display_count: usize,
    fetch_from: Option<FetchCursor>,
    next_fetch_from: Option<FetchCursor>,
    order: OrderDirection,
    list_generation: u64,
}

impl PaginationController {
    pub fn new(initial_render_limit: usize, add_display_count: usize, order: OrderDirection) -> Self {
        Self {
            state: PaginationState::Idle,
            items: None,
            display_count: initial_render_limit,
            initial_render_limit,
            add_display_count,
            fetch_from: None,
            next_fetch_from: None,
            order,
            list_generation: 0,
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn items(&self) -> Option<&[ItemId]> {
        self.items.as_deref()
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn list_generation(&self) -> u64 {
        self.list_generation
    }

    pub fn fetch_from(&self) -> Option<&FetchCursor> {
        self.fetch_from.as_ref()
    }

    pub fn next_fetch_from(&self) -> Option<&FetchCursor> {
        self.next_fetch_from.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_from.is_some()
    }

    fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn visible(&self) -> &[ItemId] {
        match &self.items {
            Some(items) => &items[..self.display_count.min(items.len())],
            None => &[],
        }
    }

    /// Items remain to reveal, either buffered or behind a known cursor.
    pub fn has_more(&self) -> bool {
        self.display_count < self.len() || self.next_fetch_from.is_some()
    }

    /// A follow-up fetch is pending and the revealed window already runs past
    /// the buffered items.
    pub fn shows_fetch_loader(&self) -> bool {
        self.fetch_from.is_some() && self.len() < self.display_count
    }

    pub fn begin_query(&mut self) {
        self.state = PaginationState::QueryInFlight;
    }

    pub fn query_failed(&mut self) {
        self.state = PaginationState::Idle;
    }

    /// Installs a new list and resets the window and fetch cursor.
    pub fn replace_items(&mut self, items: Vec<ItemId>, next_fetch_from: Option<FetchCursor>) {
        self.items = Some(items);
        self.display_count = self.initial_render_limit;
        self.fetch_from = None;
        self.next_fetch_from = next_fetch_from;
        self.list_generation += 1;
        self.state = PaginationState::DisplayingPartial;
    }

    /// The primary query returned the list already shown.
    pub fn keep_items(&mut self) {
        self.state = if self.is_fetching() {
            PaginationState::FetchingMore
        } else {
            PaginationState::DisplayingPartial
        };
    }

    /// Reveals the next batch. Returns a ticket when a follow-up fetch should be
    /// issued: few buffered items remain, no fetch is pending, and a new cursor
    /// is known. With the buffer exhausted a known cursor still counts as more,
    /// so a failed follow-up fetch can be retried.
    pub fn make_more_items(&mut self) -> Option<FetchTicket> {
        if !self.has_more() {
            return None;
        }
        // The window already covers the buffer and waits on the pending page.
        if self.fetch_from.is_some() && self.display_count >= self.len() {
            return None;
        }

        let previous = self.display_count;
        self.display_count += self.add_display_count;
        tracing::debug!(
            target: "feed::pagination",
            display_count = self.display_count,
            items = self.len(),
            "revealed more items"
        );

        let remaining = self.len().saturating_sub(previous);
        if remaining >= self.add_display_count * 2 || self.fetch_from.is_some() {
            return None;
        }
        let next = self.next_fetch_from.clone()?;

        self.fetch_from = Some(next.clone());
        self.state = PaginationState::FetchingMore;
        Some(FetchTicket {
            list_generation: self.list_generation,
            cursor: next,
            limit: self.add_display_count,
        })
    }

    pub fn apply_fetch_result(
        &mut self,
        ticket: &FetchTicket,
        result: Result<QueryPage>,
    ) -> FetchOutcome {
        if ticket.list_generation != self.list_generation
            || self.fetch_from.as_ref() != Some(&ticket.cursor)
        {
            tracing::debug!(
                target: "feed::pagination",
                cursor = %ticket.cursor,
                "discarding stale follow-up page"
            );
            return FetchOutcome::StaleDiscarded;
        }

        self.fetch_from = None;
        self.state = PaginationState::DisplayingPartial;

        match result {
            Ok(page) => {
                let before = self.len();
                self.next_fetch_from = FetchCursor::next(&page.items, ticket.limit, self.order);
                let current = self.items.take().unwrap_or_default();
                let merged = merge_items(page.items, current, self.order);
                let added = merged.len().saturating_sub(before);
                self.items = Some(merged);
                FetchOutcome::Merged { added }
            }
            Err(err) => {
                tracing::warn!(
                    target: "feed::pagination",
                    cursor = %ticket.cursor,
                    error = %err,
                    "follow-up fetch failed"
                );
                FetchOutcome::Failed
            }
        }
    }
}

/// Union of both pages without duplicates, sorted in list order.
pub fn merge_items(new_items: Vec<ItemId>, existing: Vec<ItemId>, order: OrderDirection) -> Vec<ItemId> {
    let mut seen = HashSet::new();
    let mut items: Vec<ItemId> = new_items
        .into_iter()
        .chain(existing)
        .filter(|item| seen.insert(item.clone()))
        .collect();
    items.sort();
    if order == OrderDirection::Desc {
        items.reverse();
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FeedError;
    use proptest::prelude::*;

    fn ids(values: &[u64]) -> Vec<ItemId> {
        values.iter().copied().map(ItemId::from).collect()
    }

    fn cursor(after: u64) -> FetchCursor {
        FetchCursor::new(ItemId::from(after), OrderDirection::Desc)
    }

    #[test]
    fn replacing_items_resets_window() {
        let mut pagination = PaginationController::new(3, 3, OrderDirection::Desc);
        pagination.begin_query();
        assert_eq!(pagination.state(), PaginationState::QueryInFlight);

        pagination.replace_items(ids(&[9, 8, 7, 6, 5, 4, 3]), None);
        pagination.make_more_items();
        assert_eq!(pagination.display_count(), 6);

        pagination.replace_items(ids(&[2, 1]), None);
        assert_eq!(pagination.display_count(), 3);
        assert_eq!(pagination.visible(), &ids(&[2, 1])[..]);
        assert_eq!(pagination.state(), PaginationState::DisplayingPartial);
    }

    #[test]
    fn request_more_at_end_is_a_no_op() {
        let mut pagination = PaginationController::new(3, 3, OrderDirection::Desc);
        pagination.replace_items(ids(&[3, 2, 1]), None);
        assert!(!pagination.has_more());
        assert_eq!(pagination.make_more_items(), None);
        assert_eq!(pagination.display_count(), 3);
        assert!(!pagination.has_more());
        assert!(!pagination.is_fetching());
    }

    #[test]
    fn failed_query_keeps_list() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[3, 2, 1]), None);
        pagination.begin_query();
        pagination.query_failed();
        assert_eq!(pagination.state(), PaginationState::Idle);
        assert_eq!(pagination.visible(), &ids(&[3, 2])[..]);
    }

    #[test]
    fn fetch_ahead_starts_when_buffer_runs_low() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8, 7, 6, 5, 4]), Some(cursor(4)));

        // 7 - 2 = 5 remaining, not below 2 * 2
        assert_eq!(pagination.make_more_items(), None);
        // 7 - 4 = 3 remaining
        let ticket = pagination.make_more_items().expect("fetch ticket");
        assert_eq!(ticket.cursor, cursor(4));
        assert_eq!(pagination.state(), PaginationState::FetchingMore);

        // only one follow-up fetch at a time
        assert_eq!(pagination.make_more_items(), None);
        assert_eq!(pagination.display_count(), 8);
    }

    #[test]
    fn fetched_page_is_merged_and_sorted() {
        let mut pagination = PaginationController::new(2, 3, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8]), Some(cursor(8)));
        let ticket = pagination.make_more_items().expect("fetch ticket");

        let outcome = pagination.apply_fetch_result(&ticket, Ok(QueryPage::new(ids(&[8, 7]))));
        assert_eq!(outcome, FetchOutcome::Merged { added: 1 });
        assert_eq!(pagination.items().expect("items"), &ids(&[10, 9, 8, 7])[..]);
        assert_eq!(pagination.fetch_from(), None);
        assert_eq!(pagination.next_fetch_from(), None);
        assert_eq!(pagination.state(), PaginationState::DisplayingPartial);
    }

    #[test]
    fn full_fetched_page_sets_next_cursor() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8]), Some(cursor(8)));
        let ticket = pagination.make_more_items().expect("fetch ticket");
        pagination.apply_fetch_result(&ticket, Ok(QueryPage::new(ids(&[7, 6]))));
        assert_eq!(pagination.next_fetch_from(), Some(&cursor(6)));
    }

    #[test]
    fn failed_fetch_clears_pending_cursor_for_retry() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8, 7, 6, 5, 4]), Some(cursor(4)));
        pagination.make_more_items();
        let ticket = pagination.make_more_items().expect("fetch ticket");

        let outcome =
            pagination.apply_fetch_result(&ticket, Err(FeedError::Transport("timeout".into())));
        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(!pagination.is_fetching());
        assert_eq!(pagination.next_fetch_from(), Some(&cursor(4)));
        assert_eq!(pagination.items().expect("items").len(), 7);

        let retry = pagination.make_more_items().expect("retry ticket");
        assert_eq!(retry.cursor, cursor(4));
    }

    #[test]
    fn failed_fetch_at_buffer_end_can_be_retried() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8, 7]), Some(cursor(7)));
        let ticket = pagination.make_more_items().expect("fetch ticket");
        assert_eq!(pagination.display_count(), 4);

        pagination.apply_fetch_result(&ticket, Err(FeedError::Transport("timeout".into())));
        assert!(pagination.has_more());

        let retry = pagination.make_more_items().expect("retry ticket");
        assert_eq!(retry.cursor, cursor(7));
        assert_eq!(pagination.display_count(), 6);

        let outcome = pagination.apply_fetch_result(&retry, Ok(QueryPage::new(ids(&[6, 5]))));
        assert_eq!(outcome, FetchOutcome::Merged { added: 2 });
        assert_eq!(pagination.visible(), &ids(&[10, 9, 8, 7, 6, 5])[..]);
    }

    #[test]
    fn pending_fetch_holds_window_at_buffer_end() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8, 7]), Some(cursor(7)));
        pagination.make_more_items().expect("fetch ticket");

        assert_eq!(pagination.make_more_items(), None);
        assert_eq!(pagination.display_count(), 4);
    }

    #[test]
    fn stale_fetch_result_is_discarded() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8]), Some(cursor(8)));
        let ticket = pagination.make_more_items().expect("fetch ticket");

        pagination.replace_items(ids(&[1]), None);
        let outcome = pagination.apply_fetch_result(&ticket, Ok(QueryPage::new(ids(&[7]))));
        assert_eq!(outcome, FetchOutcome::StaleDiscarded);
        assert_eq!(pagination.items().expect("items"), &ids(&[1])[..]);
    }

    #[test]
    fn fetch_loader_shows_while_window_outruns_buffer() {
        let mut pagination = PaginationController::new(2, 2, OrderDirection::Desc);
        pagination.replace_items(ids(&[10, 9, 8]), Some(cursor(8)));
        pagination.make_more_items();
        assert!(pagination.shows_fetch_loader());
    }

    #[test]
    fn merge_ascending_order() {
        let merged = merge_items(ids(&[5, 3]), ids(&[1, 3]), OrderDirection::Asc);
        assert_eq!(merged, ids(&[1, 3, 5]));
    }

    proptest! {
        #[test]
        fn prop_display_count_never_decreases(
            len in 0usize..40,
            initial in 1usize..6,
            step in 1usize..6,
            requests in 0usize..20,
        ) {
            let mut pagination = PaginationController::new(initial, step, OrderDirection::Desc);
            let items: Vec<ItemId> = (0..len as u64).rev().map(ItemId::from).collect();
            pagination.replace_items(items, None);
            let mut last = pagination.display_count();
            for _ in 0..requests {
                pagination.make_more_items();
                prop_assert!(pagination.display_count() >= last);
                last = pagination.display_count();
            }
            prop_assert!(pagination.visible().len() <= len);
        }
    }
}
