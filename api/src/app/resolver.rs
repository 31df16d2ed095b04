//! Two-stage resolver
//!
//! Some feeds can only be scoped after a first search: replies to an author
//! need the IDs of that author's comments, and the whoishiring feeds need the
//! current month's thread. The resolver runs that discovery search and folds
//! the result into the plan's filters. Any failure stops the request before
//! the real search is issued.

use crate::app::request_builder::{FeedPlan, FeedTarget, PendingDiscovery};
use crate::domain::entities::{Hit, SearchRequest};
use crate::domain::ports::SearchClient;
use crate::error::AppError;

const HIRING_THREAD_TAGS: &str = "story,author_whoishiring";

pub async fn resolve<SC>(search: &SC, plan: FeedPlan) -> Result<FeedTarget, AppError>
where
    SC: SearchClient + ?Sized,
{
    let FeedPlan {
        mut target,
        discovery,
    } = plan;

    match discovery {
        None => {}
        Some(PendingDiscovery::RepliesByAuthor(author)) => {
            let request = SearchRequest {
                tags: format!("comment,author_{}", author),
                ..Default::default()
            };
            let comments = discover(search, &request).await?;

            target.request.filters = parent_filter(&comments);
        }
        Some(PendingDiscovery::HiringThread(phrase)) => {
            let mut request = SearchRequest {
                tags: HIRING_THREAD_TAGS.to_string(),
                ..Default::default()
            };
            if let Some(phrase) = phrase {
                request.query = format!("\"{}\"", phrase);
                request.hits_per_page = Some(1);
            }
            let threads = discover(search, &request).await?;
            // discover never returns an empty list
            let current = &threads[0];

            target.request.filters = match phrase {
                Some(_) => parent_filter(std::slice::from_ref(current)),
                None => parent_filter(&threads),
            };
            target.title = current.title.clone();
            target.link = current.permalink();
        }
    }

    Ok(target)
}

/// Run a discovery search; zero hits is an error, not an empty feed
async fn discover<SC>(search: &SC, request: &SearchRequest) -> Result<Vec<Hit>, AppError>
where
    SC: SearchClient + ?Sized,
{
    let response = search.search(request).await?;

    if response.hits.is_empty() {
        return Err(AppError::NoDiscoveryResults(search.search_url(request)));
    }

    tracing::debug!(
        tags = %request.tags,
        discovered = response.hits.len(),
        "Discovery search resolved"
    );
    Ok(response.hits)
}

/// `parent_id=1 OR parent_id=2 ...`
fn parent_filter(hits: &[Hit]) -> String {
    hits.iter()
        .map(|hit| format!("parent_id={}", hit.object_id))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::request_builder::{build_plan, FeedParams};
    use crate::app::routes::FeedRoute;
    use crate::test_utils::{test_comment, test_hiring_thread, MockSearchClient};

    fn params(id: &str) -> FeedParams {
        FeedParams {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn numeric_replies_skip_discovery() {
        let search = MockSearchClient::new();
        let plan = build_plan(FeedRoute::Replies, &params("123")).unwrap();

        let target = resolve(&search, plan).await.unwrap();

        assert_eq!(target.request.filters, "parent_id=123");
        assert!(search.requests().is_empty());
    }

    #[tokio::test]
    async fn author_replies_or_together_comment_ids() {
        let search = MockSearchClient::new().with_hits(
            "comment,author_alice",
            vec![
                test_comment("1", "alice", "Story A"),
                test_comment("2", "alice", "Story B"),
            ],
        );
        let plan = build_plan(FeedRoute::Replies, &params("alice")).unwrap();

        let target = resolve(&search, plan).await.unwrap();

        assert_eq!(target.request.filters, "parent_id=1 OR parent_id=2");
        assert_eq!(target.request.tags, "comment");
        assert_eq!(target.link, "https://news.ycombinator.com/threads?id=alice");

        let requests = search.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].tags, "comment,author_alice");
    }

    #[tokio::test]
    async fn author_without_comments_fails() {
        let search = MockSearchClient::new();
        let plan = build_plan(FeedRoute::Replies, &params("ghost")).unwrap();

        let result = resolve(&search, plan).await;

        assert!(matches!(result, Err(AppError::NoDiscoveryResults(_))));
    }

    #[tokio::test]
    async fn hiring_thread_uses_first_story() {
        let search = MockSearchClient::new().with_hits(
            HIRING_THREAD_TAGS,
            vec![test_hiring_thread("900", "Ask HN: Who is hiring? (March 2024)")],
        );
        let plan = build_plan(FeedRoute::HiringJobs, &FeedParams::default()).unwrap();

        let target = resolve(&search, plan).await.unwrap();

        assert_eq!(target.request.filters, "parent_id=900");
        assert_eq!(target.title, "Ask HN: Who is hiring? (March 2024)");
        assert_eq!(target.link, "https://news.ycombinator.com/item?id=900");

        let requests = search.requests();
        assert_eq!(requests[0].query, "\"Ask HN: Who is hiring?\"");
        assert_eq!(requests[0].hits_per_page, Some(1));
    }

    #[tokio::test]
    async fn all_hiring_threads_are_combined() {
        let search = MockSearchClient::new().with_hits(
            HIRING_THREAD_TAGS,
            vec![
                test_hiring_thread("901", "Ask HN: Who is hiring? (April 2024)"),
                test_hiring_thread("902", "Ask HN: Who wants to be hired? (April 2024)"),
                test_hiring_thread("903", "Ask HN: Freelancer? Seeking freelancer? (April 2024)"),
            ],
        );
        let plan = build_plan(FeedRoute::HiringAll, &FeedParams::default()).unwrap();

        let target = resolve(&search, plan).await.unwrap();

        assert_eq!(
            target.request.filters,
            "parent_id=901 OR parent_id=902 OR parent_id=903"
        );
        assert_eq!(target.title, "Ask HN: Who is hiring? (April 2024)");

        let requests = search.requests();
        assert!(requests[0].query.is_empty());
        assert_eq!(requests[0].hits_per_page, None);
    }

    #[tokio::test]
    async fn hiring_without_thread_fails() {
        let search = MockSearchClient::new();
        let plan = build_plan(FeedRoute::HiringAll, &FeedParams::default()).unwrap();

        let result = resolve(&search, plan).await;

        assert!(matches!(result, Err(AppError::NoDiscoveryResults(_))));
        assert_eq!(search.requests().len(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_propagates() {
        let search = MockSearchClient::failing();
        let plan = build_plan(FeedRoute::HiringJobs, &FeedParams::default()).unwrap();

        let result = resolve(&search, plan).await;

        assert!(matches!(result, Err(AppError::Search(_))));
    }
}
