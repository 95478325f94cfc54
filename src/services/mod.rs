mod cloud_init_template;

pub use cloud_init_template::MinijinjaCloudInitRenderer;
