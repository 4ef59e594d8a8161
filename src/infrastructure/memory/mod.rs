pub mod hotness_store;
pub mod post_index;

pub use hotness_store::InMemoryHotnessStore;
pub use post_index::InMemoryPostIndex;
