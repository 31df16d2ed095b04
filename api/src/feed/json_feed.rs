//! JSON Feed 1.0 encoder

use serde::Serialize;

use super::timestamp;
use crate::domain::entities::{FeedDocument, FeedFormat};

const VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: &'a str,
    items: Vec<JsonFeedItem<'a>>,
}

#[derive(Serialize)]
struct JsonFeedItem<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_html: Option<&'a str>,
    url: &'a str,
    date_published: String,
    author: JsonFeedAuthor<'a>,
}

#[derive(Serialize)]
struct JsonFeedAuthor<'a> {
    name: &'a str,
}

/// Render a feed as a JSON Feed 1.0 document
pub fn render_json_feed(document: &FeedDocument) -> Result<String, serde_json::Error> {
    let meta = &document.metadata;

    let feed = JsonFeed {
        version: VERSION,
        title: &meta.title,
        home_page_url: &meta.link,
        feed_url: &meta.self_link,
        items: document
            .items
            .iter()
            .map(|item| JsonFeedItem {
                id: &item.permalink_url,
                title: &item.title,
                content_html: item.description_html.as_deref(),
                url: &item.target_url,
                date_published: timestamp(FeedFormat::JsonFeed, item.published_at),
                author: JsonFeedAuthor { name: &item.author },
            })
            .collect(),
    };

    serde_json::to_string(&feed)
}
