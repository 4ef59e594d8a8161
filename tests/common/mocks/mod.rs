pub mod mock_renderer;
pub mod mock_transport;

pub use mock_renderer::*;
pub use mock_transport::*;
