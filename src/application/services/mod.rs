pub mod feed_controller;
pub mod hotness_ranker;
pub mod pagination;
pub mod query_builder;
pub mod render_cache;

pub use feed_controller::{FeedController, QueryOutcome, QueryTicket};
pub use hotness_ranker::HotnessRanker;
pub use pagination::{FetchOutcome, FetchTicket, PaginationController, PaginationState};
pub use query_builder::QueryBuilder;
pub use render_cache::RenderCache;
