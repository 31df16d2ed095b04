//! Feed module
//!
//! Encoders that turn an assembled [`FeedDocument`] into RSS 2.0, Atom 1.0
//! or JSON Feed 1.0.

pub mod atom;
pub mod json_feed;
pub mod rss;
mod xml;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::{FeedDocument, FeedFormat};
use crate::error::AppError;

pub const GENERATOR: &str = concat!("hnrss v", env!("CARGO_PKG_VERSION"));
pub const DOCS_URL: &str = "https://hnrss.org/";

/// An encoded feed body with its content type
#[derive(Debug)]
pub struct RenderedFeed {
    pub content_type: &'static str,
    pub body: String,
}

/// Encode a feed in the format recorded in its metadata
pub fn render(document: &FeedDocument) -> Result<RenderedFeed, AppError> {
    let rendered = match document.metadata.format {
        FeedFormat::Rss => RenderedFeed {
            content_type: "application/xml; charset=utf-8",
            body: rss::render_rss(document),
        },
        FeedFormat::Atom => RenderedFeed {
            content_type: "application/xml; charset=utf-8",
            body: atom::render_atom(document),
        },
        FeedFormat::JsonFeed => RenderedFeed {
            content_type: "application/json; charset=utf-8",
            body: json_feed::render_json_feed(document)
                .map_err(|e| AppError::Internal(format!("JSON Feed encoding failed: {}", e)))?,
        },
    };
    Ok(rendered)
}

/// Timestamp in the layout each format expects
pub fn timestamp(format: FeedFormat, time: DateTime<Utc>) -> String {
    match format {
        FeedFormat::Rss => time.format("%a, %d %b %Y %H:%M:%S %z").to_string(),
        FeedFormat::Atom | FeedFormat::JsonFeed => time.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// HTTP-date, for `Last-Modified`
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
