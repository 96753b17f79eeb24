use crate::{Result, ScrapeError};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};

/// Outcome of fetching one listing page.
///
/// End-of-pagination is a value, not an error: the site answers HTTP 404
/// once the page number runs past the available content, and the collector
/// treats that as normal termination. Only genuinely unexpected transport
/// conditions surface as [`ScrapeError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page exists; its decoded body text.
    Body(String),
    /// The site reported the page absent (HTTP 404) — the canonical
    /// end-of-pagination signal.
    NotFound,
}

/// Trait for the page-fetch collaborator, mockable for testing.
///
/// Implementations must distinguish "resource absent" (returned as
/// [`FetchOutcome::NotFound`]) from every other failure, since that
/// distinction drives pagination termination.
///
/// When the `mock` feature is enabled, this crate provides `MockPageFetcher`
/// implementing this trait via the `mockall` library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait PageFetcher {
    /// Fetch one URL and return its body, or `NotFound` for an HTTP 404.
    async fn fetch(&self, url: &str) -> Result<FetchOutcome>;
}

/// [`PageFetcher`] backed by any [`HttpClient`] implementation.
///
/// Performs a plain GET with browser-like headers. No retries, no
/// backoff, no redirect handling beyond what the underlying client does.
///
/// # Examples
///
/// ```rust,no_run
/// use pitchfork_tracks::HttpPageFetcher;
///
/// let http_client = http_client::native::NativeClient::new();
/// let fetcher = HttpPageFetcher::new(Box::new(http_client));
/// ```
pub struct HttpPageFetcher {
    client: Box<dyn HttpClient>,
}

impl HttpPageFetcher {
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| ScrapeError::Http(format!("invalid URL '{url}': {e}")))?;

        let mut request = Request::new(Method::Get, parsed);
        request.insert_header("User-Agent", "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36");
        request.insert_header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        );
        request.insert_header("Accept-Language", "en-US,en;q=0.9");

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| ScrapeError::Http(e.to_string()))?;

        log::debug!("GET {url} -> {}", response.status());

        if response.status() == 404 {
            return Ok(FetchOutcome::NotFound);
        }

        if !response.status().is_success() {
            return Err(ScrapeError::Http(format!(
                "unexpected status {} for {url}",
                response.status()
            )));
        }

        let body = response
            .body_string()
            .await
            .map_err(|e| ScrapeError::Http(format!("failed to read body of {url}: {e}")))?;

        Ok(FetchOutcome::Body(body))
    }
}
