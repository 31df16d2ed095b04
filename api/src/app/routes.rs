//! Feed route table
//!
//! Every feed is described by one declarative entry: its path, the tag
//! expression it searches, how its title and link are built, and whether it
//! needs a discovery search first. `{id}` is replaced by the caller's `id`.

/// Base URL of the Hacker News site
pub const HN_BASE_URL: &str = "https://news.ycombinator.com";

/// Feed routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRoute {
    Newest,
    FrontPage,
    NewComments,
    AskHn,
    ShowHn,
    Polls,
    Jobs,
    UserAll,
    UserThreads,
    UserSubmitted,
    Replies,
    Item,
    HiringJobs,
    HiringHired,
    HiringFreelance,
    HiringAll,
}

/// How a route's scope is narrowed before the real search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// Single search, no discovery stage
    None,
    /// Replies to an item ID, or to every comment by an author
    Replies,
    /// Comments on the current whoishiring thread(s); `None` means all of them
    HiringThread(Option<&'static str>),
}

/// One row of the route table
#[derive(Debug)]
pub struct RouteDefinition {
    pub route: FeedRoute,
    pub path: &'static str,
    pub tags: &'static str,
    /// Empty for whoishiring routes, whose title is the resolved thread's
    pub label: &'static str,
    /// Path on the HN site
    pub link: &'static str,
    pub requires_id: bool,
    /// Search story and comment bodies, not just titles, when a query is given
    pub search_bodies: bool,
    pub discovery: Discovery,
}

/// Ordered like [`FeedRoute`]'s variants
pub const ROUTES: [RouteDefinition; 16] = [
    RouteDefinition {
        route: FeedRoute::Newest,
        path: "/newest",
        tags: "(story,poll)",
        label: "Newest",
        link: "/newest",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::FrontPage,
        path: "/frontpage",
        tags: "front_page",
        label: "Front Page",
        link: "/",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::NewComments,
        path: "/newcomments",
        tags: "comment",
        label: "New Comments",
        link: "/newcomments",
        requires_id: false,
        search_bodies: true,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::AskHn,
        path: "/ask",
        tags: "ask_hn",
        label: "Ask HN",
        link: "/ask",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::ShowHn,
        path: "/show",
        tags: "show_hn",
        label: "Show HN",
        link: "/shownew",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::Polls,
        path: "/polls",
        tags: "poll",
        label: "Polls",
        link: "/",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::Jobs,
        path: "/jobs",
        tags: "job",
        label: "Jobs",
        link: "/jobs",
        requires_id: false,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::UserAll,
        path: "/user",
        tags: "(story,comment,poll),author_{id}",
        label: "{id}",
        link: "/user?id={id}",
        requires_id: true,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::UserThreads,
        path: "/threads",
        tags: "comment,author_{id}",
        label: "{id} threads",
        link: "/threads?id={id}",
        requires_id: true,
        search_bodies: true,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::UserSubmitted,
        path: "/submitted",
        tags: "(story,poll),author_{id}",
        label: "{id} submitted",
        link: "/submitted?id={id}",
        requires_id: true,
        search_bodies: false,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::Replies,
        path: "/replies",
        tags: "comment",
        label: "New replies to {id}",
        link: "/threads?id={id}",
        requires_id: true,
        search_bodies: true,
        discovery: Discovery::Replies,
    },
    RouteDefinition {
        route: FeedRoute::Item,
        path: "/item",
        tags: "comment,story_{id}",
        label: "New comments on item {id}",
        link: "/item?id={id}",
        requires_id: true,
        search_bodies: true,
        discovery: Discovery::None,
    },
    RouteDefinition {
        route: FeedRoute::HiringJobs,
        path: "/whoishiring/jobs",
        tags: "comment",
        label: "",
        link: "/submitted?id=whoishiring",
        requires_id: false,
        search_bodies: true,
        discovery: Discovery::HiringThread(Some("Ask HN: Who is hiring?")),
    },
    RouteDefinition {
        route: FeedRoute::HiringHired,
        path: "/whoishiring/hired",
        tags: "comment",
        label: "",
        link: "/submitted?id=whoishiring",
        requires_id: false,
        search_bodies: true,
        discovery: Discovery::HiringThread(Some("Ask HN: Who wants to be hired?")),
    },
    RouteDefinition {
        route: FeedRoute::HiringFreelance,
        path: "/whoishiring/freelance",
        tags: "comment",
        label: "",
        link: "/submitted?id=whoishiring",
        requires_id: false,
        search_bodies: true,
        discovery: Discovery::HiringThread(Some("Ask HN: Freelancer? Seeking freelancer?")),
    },
    RouteDefinition {
        route: FeedRoute::HiringAll,
        path: "/whoishiring",
        tags: "comment",
        label: "",
        link: "/submitted?id=whoishiring",
        requires_id: false,
        search_bodies: true,
        discovery: Discovery::HiringThread(None),
    },
];

impl FeedRoute {
    pub fn definition(self) -> &'static RouteDefinition {
        &ROUTES[self as usize]
    }

    pub fn all() -> impl Iterator<Item = FeedRoute> {
        ROUTES.iter().map(|definition| definition.route)
    }
}

impl RouteDefinition {
    pub fn tags_for(&self, id: &str) -> String {
        fill(self.tags, id)
    }

    pub fn label_for(&self, id: &str) -> String {
        fill(self.label, id)
    }

    pub fn link_for(&self, id: &str) -> String {
        format!("{}{}", HN_BASE_URL, fill(self.link, id))
    }
}

fn fill(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

/// `Hacker News: {label}`, or `Hacker News - {label}: "{query}"` when searching
pub fn feed_title(label: &str, query: &str) -> String {
    if query.is_empty() {
        format!("Hacker News: {}", label)
    } else {
        format!("Hacker News - {}: \"{}\"", label, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_like_the_enum() {
        for (index, definition) in ROUTES.iter().enumerate() {
            assert_eq!(definition.route as usize, index, "{}", definition.path);
            assert_eq!(definition.route.definition().path, definition.path);
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = ROUTES.iter().map(|d| d.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn user_routes_substitute_id() {
        let all = FeedRoute::UserAll.definition();
        assert_eq!(all.tags_for("pg"), "(story,comment,poll),author_pg");
        assert_eq!(all.link_for("pg"), "https://news.ycombinator.com/user?id=pg");

        assert_eq!(
            FeedRoute::UserThreads.definition().tags_for("pg"),
            "comment,author_pg"
        );
        assert_eq!(
            FeedRoute::UserSubmitted.definition().tags_for("pg"),
            "(story,poll),author_pg"
        );
        assert_eq!(FeedRoute::Item.definition().tags_for("8863"), "comment,story_8863");
    }

    #[test]
    fn routes_needing_an_id() {
        let with_id: Vec<&str> = ROUTES
            .iter()
            .filter(|d| d.requires_id)
            .map(|d| d.path)
            .collect();
        assert_eq!(with_id, vec!["/user", "/threads", "/submitted", "/replies", "/item"]);
    }

    #[test]
    fn only_hiring_routes_leave_the_label_to_discovery() {
        for definition in &ROUTES {
            let hiring = matches!(definition.discovery, Discovery::HiringThread(_));
            assert_eq!(definition.label.is_empty(), hiring, "{}", definition.path);
        }
    }

    #[test]
    fn title_with_and_without_query() {
        assert_eq!(feed_title("Newest", ""), "Hacker News: Newest");
        assert_eq!(
            feed_title("Newest", "rust"),
            "Hacker News - Newest: \"rust\""
        );
    }
}
