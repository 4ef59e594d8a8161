//! DevHub post feed: turns a search condition into a posts query, keeps the
//! visible window of results, ranks the hot view and caches rendered items.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;

pub use application::ports::{HotnessSource, ItemRenderer, PostQuery, QueryPage, QueryTransport, RenderOptions};
pub use application::services::{FeedController, FetchOutcome, QueryOutcome};
pub use domain::value_objects::{HotPeriod, ItemId, Recency, SearchCondition, TagFilter};
pub use presentation::dto::{FeedBody, FeedView, LoadMoreControl};
pub use shared::{init_logging, FeedConfig, FeedError};
