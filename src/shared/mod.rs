pub mod config;
pub mod error;
pub mod logging;

pub use config::FeedConfig;
pub use error::{FeedError, Result};
pub use logging::init_logging;
