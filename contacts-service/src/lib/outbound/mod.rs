pub mod cache;
pub mod email;
pub mod media;
pub mod repositories;
