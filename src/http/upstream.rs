//! Upstream font API client.
//!
//! # Responsibilities
//! - Build the upstream CSS URL from the client's query string
//! - Issue the single upstream fetch (one attempt, no retries)
//! - Forward the client's `user-agent`, since the API varies its CSS by it
//!
//! # Design Decisions
//! - The client is built once and shared; each request only clones handles
//! - Query parameters other than `family` pass through untouched;
//!   each `family` is replaced with its upstream-facing value

use std::time::Duration;

use axum::http::HeaderValue;
use url::form_urlencoded;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::css::FamilySpec;
use crate::error::ProxyResult;

/// Client for the upstream font API.
pub struct FontApi {
    client: reqwest::Client,
    base: Url,
    css_path: String,
}

impl FontApi {
    /// Build the API client from validated configuration.
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Self {
        let base = Url::parse(&upstream.base_url).expect("invalid upstream base URL");
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()
            .expect("failed to build upstream HTTP client");
        Self {
            client,
            base,
            css_path: upstream.css_path.clone(),
        }
    }

    /// Build the upstream CSS URL for a client query.
    ///
    /// Every parameter except `family` is copied through; one `family`
    /// parameter per requested spec is appended with its upstream-facing
    /// value (`family` or `family:axis`).
    pub fn css_url(&self, client_query: &str, specs: &[FamilySpec]) -> Url {
        let mut url = self.base.clone();
        url.set_path(&self.css_path);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in form_urlencoded::parse(client_query.as_bytes()) {
                if key != "family" {
                    pairs.append_pair(&key, &value);
                }
            }
            for spec in specs {
                pairs.append_pair("family", &spec.google_family());
            }
        }
        url
    }

    /// Fetch the CSS document. One attempt; the caller decides what a
    /// non-success status means.
    pub async fn fetch_css(
        &self,
        url: Url,
        user_agent: Option<&HeaderValue>,
    ) -> ProxyResult<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(ua) = user_agent {
            request = request.header(reqwest::header::USER_AGENT, ua.clone());
        }
        Ok(request.send().await?)
    }
}
