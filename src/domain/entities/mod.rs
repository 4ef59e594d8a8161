pub mod hotness;
pub mod post_record;

pub use hotness::HotnessInput;
pub use post_record::{PostRecord, POST_TYPE_COMMENT};
