use thiserror::Error;

/// Error types for scraping operations.
///
/// This enum covers everything that can go wrong while collecting tracks:
/// bad page ranges, network failures, and listing markup that no longer
/// matches the expected entry shape.
///
/// Note that reaching the end of the paginated listing is *not* an error.
/// The fetch collaborator reports it as [`FetchOutcome::NotFound`](crate::FetchOutcome)
/// and the collector converts it into normal termination.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use pitchfork_tracks::{HttpPageFetcher, ScrapeError, TracksCollector};
///
/// #[tokio::main]
/// async fn main() {
///     let http_client = http_client::native::NativeClient::new();
///     let fetcher = HttpPageFetcher::new(Box::new(http_client));
///     let collector = TracksCollector::new(Box::new(fetcher));
///
///     match collector.collect().await {
///         Ok(records) => println!("Collected {} records", records.len()),
///         Err(ScrapeError::Transport { page, message }) => {
///             eprintln!("Network error on page {page}: {message}");
///         }
///         Err(ScrapeError::MalformedEntry { page, index, reason }) => {
///             eprintln!("Entry {index} on page {page} no longer parses: {reason}");
///         }
///         Err(e) => eprintln!("Other error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The requested page range is unusable.
    ///
    /// Raised before any network activity: `start_page` must be at least 1
    /// and `end_page` must not be smaller than `start_page`.
    #[error("invalid page range: start_page={start_page}, end_page={end_page}")]
    InvalidRange {
        /// Requested first page
        start_page: u32,
        /// Requested last page
        end_page: u32,
    },

    /// HTTP/network related errors from the fetch collaborator.
    ///
    /// This includes connection failures, timeouts, DNS errors, and
    /// unexpected (non-404) status codes. An HTTP 404 is never reported
    /// through this variant.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A transport failure attributed to a specific listing page.
    ///
    /// The collector wraps [`ScrapeError::Http`] with the page number that
    /// was being fetched so the failure can be located. The run aborts and
    /// no output is written.
    #[error("transport failure fetching page {page}: {message}")]
    Transport {
        /// Page number that was being fetched when the failure occurred
        page: u32,
        /// Underlying transport error message
        message: String,
    },

    /// An entry link matched the listing selector but lacked the expected
    /// internal structure (headline or artist list).
    ///
    /// This usually means Pitchfork changed their page templates. Whether
    /// this aborts the run or skips the entry is controlled by
    /// [`MalformedEntryPolicy`](crate::MalformedEntryPolicy).
    #[error("malformed entry {index} on page {page}: {reason}")]
    MalformedEntry {
        /// Page number the entry was found on
        page: u32,
        /// Zero-based index of the entry within the page
        index: usize,
        /// What was missing from the entry's markup
        reason: String,
    },

    /// File system I/O errors while writing the output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors while writing the output file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
