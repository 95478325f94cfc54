mod cloud_init_renderer;

pub use cloud_init_renderer::{CloudInitRenderer, RenderedCloudInit};
