pub mod gravatar;
pub mod image_host;

pub use gravatar::gravatar_url;
pub use image_host::HttpImageHost;
