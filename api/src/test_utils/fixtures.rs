//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid hit that can be customized.

use chrono::{TimeZone, Utc};

use crate::domain::entities::{FeedDocument, FeedFormat, FeedItem, FeedMetadata, Hit};

const TEST_CREATED_AT: &str = "2024-03-01T15:04:05.000Z";

/// Create a link story
pub fn test_story(id: &str, title: &str, url: &str) -> Hit {
    Hit {
        tags: vec![
            "story".to_string(),
            "author_pg".to_string(),
            format!("story_{}", id),
        ],
        object_id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        author: "pg".to_string(),
        created_at: TEST_CREATED_AT.to_string(),
        num_comments: 10,
        points: 42,
        ..Default::default()
    }
}

/// Create a self post (Ask HN style story with a body)
pub fn test_self_post(id: &str, title: &str, body: &str) -> Hit {
    Hit {
        story_text: body.to_string(),
        url: String::new(),
        ..test_story(id, title, "")
    }
}

/// Create a comment on a story
pub fn test_comment(id: &str, author: &str, story_title: &str) -> Hit {
    Hit {
        tags: vec![
            "comment".to_string(),
            format!("author_{}", author),
            "story_1".to_string(),
        ],
        object_id: id.to_string(),
        author: author.to_string(),
        created_at: TEST_CREATED_AT.to_string(),
        story_title: story_title.to_string(),
        comment_text: format!("<p>Comment {}</p>", id),
        ..Default::default()
    }
}

/// Create a whoishiring thread story
pub fn test_hiring_thread(id: &str, title: &str) -> Hit {
    Hit {
        author: "whoishiring".to_string(),
        ..test_self_post(id, title, "Please state the location and include REMOTE")
    }
}

/// Create an assembled two-item feed
pub fn test_document(format: FeedFormat) -> FeedDocument {
    let time = Utc.with_ymd_and_hms(2024, 3, 1, 15, 4, 5).unwrap();

    FeedDocument {
        metadata: FeedMetadata {
            title: "Hacker News: Newest".to_string(),
            link: "https://news.ycombinator.com/newest".to_string(),
            self_link: "https://hnrss.org/newest?q=a&points=1".to_string(),
            format,
            last_modified: time,
        },
        items: vec![
            FeedItem {
                title: "Tom & Jerry".to_string(),
                permalink_url: "https://news.ycombinator.com/item?id=2".to_string(),
                target_url: "https://example.com/tj".to_string(),
                description_html: Some("<p>Points: 5</p>".to_string()),
                published_at: time,
                author: "alice".to_string(),
                comment_count: 1,
                points: 5,
            },
            FeedItem {
                title: "Ask HN: Anything?".to_string(),
                permalink_url: "https://news.ycombinator.com/item?id=1".to_string(),
                target_url: "https://news.ycombinator.com/item?id=1".to_string(),
                description_html: Some("<p>Body</p>".to_string()),
                published_at: time,
                author: "bob".to_string(),
                comment_count: 0,
                points: 1,
            },
        ],
        upstream_url: "https://hn.algolia.com/api/v1/search_by_date?tags=%28story%2Cpoll%29"
            .to_string(),
    }
}
