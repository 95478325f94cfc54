mod mock_renderer;

#[allow(unused_imports)]
pub use mock_renderer::MockRenderer;
