//! Page fetching
//!
//! `PageFetcher` abstracts the network so the surface can be driven by a stub
//! in tests; `ReqwestFetcher` is the real HTTP(S) implementation.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::core::config::BrowserConfig;
use crate::core::{NavigationErrorKind, Page, Result};

/// Trait for page loaders
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and summarize it
    async fn fetch(&self, url: Url) -> std::result::Result<Page, NavigationErrorKind>;

    /// Get the fetcher name
    fn name(&self) -> &str;
}

/// HTTP(S) fetcher backed by reqwest
pub struct ReqwestFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl ReqwestFetcher {
    /// Build a fetcher from the browser configuration
    pub fn new(config: &BrowserConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: Url) -> std::result::Result<Page, NavigationErrorKind> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(&e))?;

        let mut page = Page::new(response.url().clone(), response.status().as_u16());
        page.content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut body: Vec<u8> = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| classify_error(&e))?;
            let room = self.max_body_bytes.saturating_sub(body.len());
            let take = chunk.len().min(room);
            body.extend_from_slice(&chunk[..take]);
            if take < chunk.len() {
                page.truncated = true;
                break;
            }
        }
        page.bytes = body.len();

        let is_html = page
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("html"))
            .unwrap_or(true);
        if is_html {
            page.title = extract_title(&String::from_utf8_lossy(&body));
        }

        debug!(url = %page.url, status = page.status, bytes = page.bytes, "Fetched page");
        Ok(page)
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}

/// Map a reqwest error onto the navigation error classification
fn classify_error(error: &reqwest::Error) -> NavigationErrorKind {
    debug!(error = %error, "Fetch failed");
    if error.is_timeout() {
        NavigationErrorKind::Timeout
    } else if error.is_redirect() {
        NavigationErrorKind::TooManyRedirects
    } else if error.is_connect() {
        NavigationErrorKind::Connection
    } else {
        NavigationErrorKind::Other
    }
}

/// Text of the first `<title>` element, whitespace collapsed
pub fn extract_title(html: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `html`
    let lower = html.to_ascii_lowercase();
    let open = find_title_tag(&lower)?;
    let start = open + lower[open..].find('>')? + 1;
    let end = start + lower[start..].find("</title")?;

    let title = html[start..end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Offset of the first `<title>` open tag; `<titlebar>` and the like are skipped
fn find_title_tag(lower: &str) -> Option<usize> {
    const TAG: &str = "<title";
    let mut from = 0;
    loop {
        let at = from + lower[from..].find(TAG)?;
        match lower.as_bytes().get(at + TAG.len()) {
            Some(&b) if b == b'>' || b.is_ascii_whitespace() => return Some(at),
            _ => from = at + TAG.len(),
        }
    }
}
