pub mod feed_view;

pub use feed_view::{empty_state_message, FeedBody, FeedHeader, FeedView, LoadMoreControl};
