pub mod hotness_source;
pub mod item_renderer;
pub mod query_transport;

pub use hotness_source::HotnessSource;
pub use item_renderer::{ItemRenderer, RenderOptions};
pub use query_transport::{PostQuery, QueryPage, QueryTransport};
