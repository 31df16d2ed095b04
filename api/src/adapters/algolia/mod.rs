//! Algolia adapter
//!
//! Implementation of the HN Search API client.

pub mod client;

pub use client::AlgoliaClient;
