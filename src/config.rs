/// The Pitchfork "Best New Tracks" listing endpoint.
///
/// Individual pages are addressed by appending `?page=N`.
pub const DEFAULT_BASE_URL: &str = "https://pitchfork.com/reviews/best/tracks/";

/// What to do when an entry link matches the listing selector but is
/// missing its headline or artist list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedEntryPolicy {
    /// Abort the whole run with [`ScrapeError::MalformedEntry`](crate::ScrapeError::MalformedEntry).
    ///
    /// A malformed entry means the site's templates changed; silently
    /// skipping it would undercount records without anyone noticing.
    #[default]
    Abort,
    /// Log the entry at `warn` level and continue with the rest of the page.
    SkipAndLog,
}

/// Configuration for one collection run.
///
/// All knobs live here; there is no process-global state. The defaults
/// match a full scrape of the listing.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// First page to fetch (1-based, must be at least 1).
    pub start_page: u32,
    /// Last page to fetch, inclusive. Pagination usually ends before this
    /// bound is reached; the site answers 404 once the listing runs out.
    pub end_page: u32,
    /// Emit one progress line per page and a termination summary via `log`.
    pub verbose: bool,
    /// How to treat entries whose internal structure doesn't parse.
    pub malformed_entry_policy: MalformedEntryPolicy,
    /// Listing endpoint. Overridable for testing against a local server.
    pub base_url: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            start_page: 1,
            end_page: 300,
            verbose: true,
            malformed_entry_policy: MalformedEntryPolicy::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
