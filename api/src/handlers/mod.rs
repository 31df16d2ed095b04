//! HTTP handlers
//!
//! Axum request handlers for the feed and site endpoints.

pub mod feeds;
pub mod site;

pub use feeds::get_feed;
pub use site::{favicon, health, robots, root};
