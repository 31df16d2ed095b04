//! Search request entity
//!
//! The parameter set sent to the search API for one feed request. Built by a
//! single route, optionally narrowed by the resolver, then consumed once.

use urlencoding::encode;

/// Separator that marks a user query as "match any of these terms"
const OR_SEPARATOR: &str = " OR ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query (possibly rewritten, see [`rewrite_or_query`])
    pub query: String,
    /// Tag expression, e.g. `(story,poll)` or `comment,author_pg`
    pub tags: String,
    /// Attribute filter expression, e.g. `parent_id=1 OR parent_id=2`
    pub filters: String,
    /// Numeric filters joined with `,`, e.g. `points>=100`
    pub numeric_filters: String,
    /// `default` widens matching to story/comment bodies
    pub search_attributes: String,
    pub optional_words: String,
    pub hits_per_page: Option<u32>,
}

impl SearchRequest {
    /// Set the free-text query, applying the OR rewrite
    pub fn set_query(&mut self, raw: &str) {
        match rewrite_or_query(raw) {
            Some(rewritten) => {
                self.query = rewritten.clone();
                self.optional_words = rewritten;
            }
            None => self.query = raw.to_string(),
        }
    }

    /// Non-empty parameters in key order
    pub fn values(&self) -> Vec<(&'static str, String)> {
        let hits_per_page = self.hits_per_page.map(|n| n.to_string()).unwrap_or_default();

        [
            ("filters", self.filters.clone()),
            ("hitsPerPage", hits_per_page),
            ("numericFilters", self.numeric_filters.clone()),
            ("optionalWords", self.optional_words.clone()),
            ("query", self.query.clone()),
            ("restrictSearchableAttributes", self.search_attributes.clone()),
            ("tags", self.tags.clone()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// URL-encoded query string of [`values`](Self::values)
    pub fn encode(&self) -> String {
        self.values()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Turn `a OR b OR c` into `"a" "b" "c"`.
///
/// The search engine has no boolean OR in free text; quoting each term and
/// passing the same string as optional words asks for any of them instead.
/// Returns `None` when the query has no ` OR `.
pub fn rewrite_or_query(query: &str) -> Option<String> {
    if !query.contains(OR_SEPARATOR) {
        return None;
    }

    let terms: Vec<String> = query
        .replace(OR_SEPARATOR, " ")
        .split_whitespace()
        .map(|term| format!("\"{}\"", term))
        .collect();

    Some(terms.join(" "))
}
