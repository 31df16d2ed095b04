//! RSS 2.0 encoder

use super::xml::{attr, cdata, element, text};
use super::{timestamp, DOCS_URL, GENERATOR};
use crate::domain::entities::{FeedDocument, FeedFormat, FeedItem};

const NS_DUBLIN_CORE: &str = "http://purl.org/dc/elements/1.1/";
const NS_ATOM: &str = "http://www.w3.org/2005/Atom";

/// Render a feed as an RSS 2.0 document
pub fn render_rss(document: &FeedDocument) -> String {
    let meta = &document.metadata;
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str(&format!(
        "<rss version=\"2.0\" xmlns:dc=\"{}\" xmlns:atom=\"{}\">\n",
        NS_DUBLIN_CORE, NS_ATOM
    ));
    buf.push_str("  <channel>\n");

    element(&mut buf, 4, "title", &meta.title);
    element(&mut buf, 4, "link", &meta.link);
    element(&mut buf, 4, "description", "Hacker News RSS");
    element(&mut buf, 4, "docs", DOCS_URL);
    element(&mut buf, 4, "generator", GENERATOR);
    element(
        &mut buf,
        4,
        "lastBuildDate",
        &timestamp(FeedFormat::Rss, meta.last_modified),
    );
    buf.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"></atom:link>\n",
        attr(&meta.self_link)
    ));

    for item in &document.items {
        render_item(&mut buf, item);
    }

    buf.push_str("  </channel>\n");
    buf.push_str("</rss>\n");

    buf
}

fn render_item(buf: &mut String, item: &FeedItem) {
    buf.push_str("    <item>\n");

    element(buf, 6, "title", &item.title);
    if let Some(description) = &item.description_html {
        buf.push_str(&format!(
            "      <description>{}</description>\n",
            cdata(description)
        ));
    }
    element(buf, 6, "pubDate", &timestamp(FeedFormat::Rss, item.published_at));
    element(buf, 6, "link", &item.target_url);
    element(buf, 6, "dc:creator", &item.author);
    element(buf, 6, "comments", &item.permalink_url);
    buf.push_str(&format!(
        "      <guid isPermaLink=\"false\">{}</guid>\n",
        text(&item.permalink_url)
    ));

    buf.push_str("    </item>\n");
}
