pub mod config;
pub mod timeline;
