//! Hit domain entity
//!
//! One record returned by the HN search API. Stories, comments, polls and job
//! posts all arrive in the same flat shape; the kind is derived from `_tags`
//! and `story_text` on every access.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Prefix for Hacker News item permalinks
pub const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// Upstream timestamp layout, e.g. `2024-03-01T15:04:05.000Z`
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Helper to deserialize null as default (empty string, zero, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search hit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(rename = "_tags", default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(rename = "objectID", default)]
    pub object_id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub author: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub story_title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub comment_text: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub story_text: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub num_comments: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub points: i64,
}

impl Hit {
    pub fn is_comment(&self) -> bool {
        self.tags.iter().any(|tag| tag == "comment")
    }

    /// A story whose body lives on HN rather than behind a link
    pub fn is_self_post(&self) -> bool {
        !self.is_comment() && !self.story_text.is_empty()
    }

    pub fn title(&self) -> String {
        if self.is_comment() {
            format!("New comment by {} in \"{}\"", self.author, self.story_title)
        } else {
            self.title.clone()
        }
    }

    pub fn permalink(&self) -> String {
        format!("{}{}", HN_ITEM_URL, self.object_id)
    }

    /// Where the item's primary link points.
    ///
    /// `link_to` defaults to `"url"` when empty. Only that mode ever returns
    /// the article URL; any other value forces the discussion permalink.
    pub fn target_url(&self, link_to: &str) -> String {
        let link_to = if link_to.is_empty() { "url" } else { link_to };

        if link_to == "url" && !self.url.is_empty() && !self.is_comment() {
            self.url.clone()
        } else {
            self.permalink()
        }
    }

    pub fn description_html(&self) -> String {
        if self.is_comment() {
            return self.comment_text.clone();
        }

        let mut lines = Vec::new();
        if self.is_self_post() {
            lines.push(format!(
                "<p>{}</p>",
                html_escape::decode_html_entities(&self.story_text)
            ));
            lines.push("<hr>".to_string());
        } else if !self.url.is_empty() {
            lines.push(format!("<p>Article URL: {}</p>", anchor(&self.url)));
        }

        let permalink = self.permalink();
        lines.push(format!("<p>Comments URL: {}</p>", anchor(&permalink)));
        lines.push(format!("<p>Points: {}</p>", self.points));
        lines.push(format!("<p># Comments: {}</p>", self.num_comments));

        lines.join("\n")
    }

    /// Parsed creation time; falls back to now so one bad record can't sink a feed
    pub fn created_at(&self) -> DateTime<Utc> {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT) {
            return parsed.and_utc();
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.created_at) {
            return parsed.with_timezone(&Utc);
        }

        tracing::warn!(
            object_id = %self.object_id,
            created_at = %self.created_at,
            "Unparseable hit timestamp, using current time"
        );
        Utc::now()
    }
}

fn anchor(href: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(href),
        html_escape::encode_text(href)
    )
}
