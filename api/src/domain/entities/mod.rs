//! Domain entities
//!
//! Pure domain models: search hits, the outgoing search request, and the
//! normalized feed handed to the encoders.

pub mod feed;
pub mod hit;
pub mod search_request;

pub use feed::{FeedDocument, FeedFormat, FeedItem, FeedMetadata};
pub use hit::{Hit, HN_ITEM_URL};
pub use search_request::SearchRequest;
