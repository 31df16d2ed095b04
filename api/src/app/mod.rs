//! Application layer
//!
//! Contains the feed use case and its stages.
//! Routes are declared in one table; every request flows through the same
//! builder → resolver → assembler pipeline.

pub mod feed_service;
pub mod request_builder;
pub mod resolver;
pub mod routes;

pub use feed_service::{FeedOptions, FeedService};
pub use request_builder::FeedParams;
pub use routes::FeedRoute;
