use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    /// Address the HTTP server binds to (HOST:PORT)
    pub bind_addr: String,
    /// Base URL of the Algolia HN Search API
    pub algolia_url: String,
    /// Public URL of this service, used for feed self links
    pub site_url: String,
    /// Where `/` redirects to
    pub homepage_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:9000".to_string()),
            algolia_url: env::var("ALGOLIA_URL")
                .unwrap_or_else(|_| "https://hn.algolia.com/api/v1".to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "https://hnrss.org".to_string()),
            homepage_url: env::var("HOMEPAGE_URL")
                .unwrap_or_else(|_| "https://edavis.github.io/hnrss/".to_string()),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}
