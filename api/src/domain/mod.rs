//! Domain layer
//!
//! Contains pure feed logic with no external dependencies.
//! - `entities`: Hits, search requests and the normalized feed model
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
