pub mod album;
pub mod search;
pub mod timeline;
