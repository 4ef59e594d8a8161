use crate::application::ports::{HotnessSource, ItemRenderer, PostQuery, QueryPage, QueryTransport};
use crate::application::services::hotness_ranker::HotnessRanker;
use crate::application::services::pagination::{FetchOutcome, FetchTicket, PaginationController};
use crate::application::services::query_builder::QueryBuilder;
use crate::application::services::render_cache::RenderCache;
use crate::domain::value_objects::{FetchCursor, HotPeriod, ItemId, SearchCondition, TagFilter};
use crate::presentation::dto::{empty_state_message, FeedBody, FeedHeader, FeedView, LoadMoreControl};
use crate::shared::{FeedConfig, FeedError, Result};
use std::sync::Arc;

/// Primary query issued for a search condition. Results are applied only for
/// the latest ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub query: PostQuery,
    /// Stored condition the query was built from.
    pub condition: SearchCondition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The result differed from the stored one; list, window and cache reset.
    Replaced,
    /// Same ids as the stored result; nothing reset.
    Unchanged,
    Failed,
    StaleDiscarded,
}

pub struct FeedController<A: Send + Sync> {
    config: FeedConfig,
    builder: QueryBuilder,
    condition: Option<SearchCondition>,
    /// Condition of the list on display; only moves when a query succeeds.
    applied_condition: Option<SearchCondition>,
    period: HotPeriod,
    loading: bool,
    query_generation: u64,
    last_result: Option<Vec<ItemId>>,
    active_query: Option<PostQuery>,
    pagination: PaginationController,
    cache: RenderCache<A>,
    renderer: Arc<dyn ItemRenderer<Artifact = A>>,
    hotness: Option<Arc<dyn HotnessSource>>,
}

impl<A: Send + Sync> FeedController<A> {
    pub fn new(
        config: FeedConfig,
        renderer: Arc<dyn ItemRenderer<Artifact = A>>,
    ) -> Result<Self> {
        config.validate()?;
        let pagination = PaginationController::new(
            config.initial_render_limit,
            config.add_display_count(),
            config.order,
        );
        Ok(Self {
            builder: QueryBuilder::new(config.query_limit, config.order),
            config,
            condition: None,
            applied_condition: None,
            period: HotPeriod::default(),
            loading: false,
            query_generation: 0,
            last_result: None,
            active_query: None,
            pagination,
            cache: RenderCache::new(),
            renderer,
            hotness: None,
        })
    }

    pub fn with_hotness_source(mut self, source: Arc<dyn HotnessSource>) -> Self {
        self.hotness = Some(source);
        self
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn condition(&self) -> Option<&SearchCondition> {
        self.condition.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    pub fn period(&self) -> HotPeriod {
        self.period
    }

    pub fn set_period(&mut self, period: HotPeriod) {
        self.period = period;
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn cached_items(&self) -> usize {
        self.cache.len()
    }

    pub fn query_generation(&self) -> u64 {
        self.query_generation
    }

    /// Stores a new condition snapshot and issues a query when any field
    /// differs from the stored one. An identical condition is a no-op.
    pub fn set_search_condition(&mut self, condition: SearchCondition) -> Option<QueryTicket> {
        let condition = condition.normalized();
        if !SearchCondition::has_changed(&condition, self.condition.as_ref()) {
            return None;
        }

        self.condition = Some(condition);
        self.loading = true;
        Some(self.issue_query(None))
    }

    /// Label clicked inside the list: re-query with that label in place of the
    /// condition's tag. The stored condition is left as is.
    pub fn select_label(&mut self, tag: TagFilter) -> QueryTicket {
        if self.condition.is_none() {
            self.condition = Some(SearchCondition::default());
        }
        self.issue_query(Some(&tag))
    }

    /// Re-issues the query for the stored condition, e.g. after a failure.
    pub fn reload(&mut self) -> QueryTicket {
        if self.condition.is_none() {
            self.condition = Some(SearchCondition::default());
        }
        self.loading = true;
        self.issue_query(None)
    }

    fn issue_query(&mut self, tag_override: Option<&TagFilter>) -> QueryTicket {
        let condition = self.condition.clone().unwrap_or_default();
        let query = self.builder.query(&condition, tag_override);
        self.query_generation += 1;
        self.pagination.begin_query();

        tracing::debug!(
            target: "feed::query",
            generation = self.query_generation,
            filter = %query.filter.to_where(),
            "searching for"
        );

        QueryTicket {
            generation: self.query_generation,
            query,
            condition,
        }
    }

    pub fn apply_query_result(
        &mut self,
        ticket: &QueryTicket,
        result: Result<QueryPage>,
    ) -> QueryOutcome {
        if ticket.generation != self.query_generation {
            tracing::debug!(
                target: "feed::query",
                generation = ticket.generation,
                latest = self.query_generation,
                "discarding stale query result"
            );
            return QueryOutcome::StaleDiscarded;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                tracing::debug!(target: "feed::query", found = page.items.len(), "search success");
                self.active_query = Some(ticket.query.clone());
                self.applied_condition = Some(ticket.condition.clone());

                if self.last_result.as_ref() == Some(&page.items) {
                    self.pagination.keep_items();
                    return QueryOutcome::Unchanged;
                }

                let next_fetch_from = if self.config.fetch_ahead {
                    FetchCursor::next(&page.items, ticket.query.limit, self.config.order)
                } else {
                    None
                };
                self.pagination.replace_items(page.items.clone(), next_fetch_from);
                self.cache.clear();
                self.last_result = Some(page.items);
                QueryOutcome::Replaced
            }
            Err(err) => {
                tracing::warn!(target: "feed::query", error = %err, "search failed");
                self.pagination.query_failed();
                QueryOutcome::Failed
            }
        }
    }

    /// Reveals the next batch; returns a ticket when a follow-up fetch is due.
    pub fn request_more(&mut self) -> Option<FetchTicket> {
        self.pagination.make_more_items()
    }

    pub fn follow_up_query(&self, ticket: &FetchTicket) -> Option<PostQuery> {
        self.active_query
            .as_ref()
            .map(|query| query.resume_from(ticket.cursor.clone(), ticket.limit))
    }

    pub fn apply_fetch_result(
        &mut self,
        ticket: &FetchTicket,
        result: Result<QueryPage>,
    ) -> FetchOutcome {
        self.pagination.apply_fetch_result(ticket, result)
    }

    /// Current consumer view. Rendering goes through the cache; in the hot view
    /// the visible prefix is reordered by score without touching the list.
    /// Header, keywords and order follow the condition of the displayed list,
    /// so a failed query leaves the view as it was.
    pub fn view(&mut self) -> FeedView<A> {
        let condition = self
            .applied_condition
            .as_ref()
            .or(self.condition.as_ref())
            .cloned()
            .unwrap_or_default();
        let header = if condition.is_hot() {
            Some(FeedHeader::hot(self.period))
        } else {
            None
        };

        let Some(items) = self.pagination.items() else {
            return FeedView {
                header,
                is_loading: true,
                body: FeedBody::Loading,
            };
        };

        if items.is_empty() {
            return FeedView {
                header,
                is_loading: self.loading,
                body: FeedBody::Empty {
                    message: empty_state_message(&condition, self.period),
                },
            };
        }

        let visible: Vec<ItemId> = self.pagination.visible().to_vec();
        let keyword = condition.term.as_deref();
        let rendered: Vec<(ItemId, Arc<A>)> = visible
            .into_iter()
            .map(|id| {
                let artifact = self.cache.get_or_render(&id, keyword, self.renderer.as_ref());
                (id, artifact)
            })
            .collect();

        let items = if condition.is_hot() {
            self.rank_hot(rendered)
        } else {
            rendered.into_iter().map(|(_, artifact)| artifact).collect()
        };

        let has_more = self.pagination.has_more();
        let load_more = if !self.config.manual {
            None
        } else if self.pagination.shows_fetch_loader() {
            Some(LoadMoreControl::Loader)
        } else if has_more {
            Some(LoadMoreControl::Link {
                text: self.config.load_more_text.clone(),
            })
        } else {
            None
        };

        FeedView {
            header,
            is_loading: self.loading,
            body: FeedBody::Items {
                items,
                has_more,
                load_more,
            },
        }
    }

    fn rank_hot(&self, rendered: Vec<(ItemId, Arc<A>)>) -> Vec<Arc<A>> {
        let scored = rendered
            .into_iter()
            .map(|(id, artifact)| {
                let score = self
                    .hotness
                    .as_ref()
                    .and_then(|source| source.hotness_input(&id))
                    .and_then(|input| HotnessRanker::score(&input));
                (artifact, score)
            })
            .collect();
        HotnessRanker::rank(scored)
    }

    /// Sets the condition and, when it changed, runs the query through
    /// `transport`.
    pub async fn refresh<T>(&mut self, transport: &T, condition: SearchCondition) -> Option<QueryOutcome>
    where
        T: QueryTransport + ?Sized,
    {
        let ticket = self.set_search_condition(condition)?;
        Some(self.run_query(transport, &ticket).await)
    }

    pub async fn run_query<T>(&mut self, transport: &T, ticket: &QueryTicket) -> QueryOutcome
    where
        T: QueryTransport + ?Sized,
    {
        let result = transport.fetch(&ticket.query).await;
        self.apply_query_result(ticket, result)
    }

    /// `request_more` followed by the follow-up fetch, when one is due.
    pub async fn load_more<T>(&mut self, transport: &T) -> Option<FetchOutcome>
    where
        T: QueryTransport + ?Sized,
    {
        let ticket = self.request_more()?;
        let result = match self.follow_up_query(&ticket) {
            Some(query) => transport.fetch(&query).await,
            None => Err(FeedError::Transport("no active query to resume".to_string())),
        };
        Some(self.apply_fetch_result(&ticket, result))
    }
}
