//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The search client mock is hand-written rather than generated: it answers
//! by tag expression and records every request, which is what the resolver
//! and assembler tests assert on.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
