//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod algolia;

pub use algolia::AlgoliaClient;
