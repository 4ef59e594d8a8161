pub mod fetch_cursor;
pub mod item_id;
pub mod render_key;
pub mod result_filter;
pub mod search_condition;

pub use fetch_cursor::{FetchCursor, OrderDirection};
pub use item_id::ItemId;
pub use render_key::{RenderKey, StableKey};
pub use result_filter::{Predicate, ResultFilter};
pub use search_condition::{HotPeriod, Recency, SearchCondition, TagFilter};
