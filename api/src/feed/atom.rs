//! Atom 1.0 encoder

use super::xml::{attr, cdata, element};
use super::{timestamp, GENERATOR};
use crate::domain::entities::{FeedDocument, FeedFormat, FeedItem};

/// Render a feed as an Atom 1.0 document
pub fn render_atom(document: &FeedDocument) -> String {
    let meta = &document.metadata;
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");

    element(&mut buf, 2, "title", &meta.title);
    buf.push_str(&format!(
        "  <link href=\"{}\" rel=\"alternate\"></link>\n",
        attr(&meta.link)
    ));
    buf.push_str(&format!(
        "  <link href=\"{}\" rel=\"self\"></link>\n",
        attr(&meta.self_link)
    ));
    element(&mut buf, 2, "id", &meta.self_link);
    element(
        &mut buf,
        2,
        "updated",
        &timestamp(FeedFormat::Atom, meta.last_modified),
    );
    element(&mut buf, 2, "generator", GENERATOR);

    for item in &document.items {
        render_entry(&mut buf, item);
    }

    buf.push_str("</feed>\n");

    buf
}

fn render_entry(buf: &mut String, item: &FeedItem) {
    let published = timestamp(FeedFormat::Atom, item.published_at);

    buf.push_str("  <entry>\n");
    element(buf, 4, "title", &item.title);
    buf.push_str(&format!(
        "    <link href=\"{}\" rel=\"alternate\"></link>\n",
        attr(&item.target_url)
    ));
    element(buf, 4, "id", &item.permalink_url);
    element(buf, 4, "published", &published);
    element(buf, 4, "updated", &published);
    buf.push_str("    <author>\n");
    element(buf, 6, "name", &item.author);
    buf.push_str("    </author>\n");
    if let Some(description) = &item.description_html {
        buf.push_str(&format!(
            "    <content type=\"html\">{}</content>\n",
            cdata(description)
        ));
    }
    buf.push_str("  </entry>\n");
}
