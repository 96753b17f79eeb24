use crate::{
    FetchOutcome, PageFetcher, Result, ScrapeConfig, ScrapeError, TrackParser, TrackRecord,
};
use scraper::Html;

/// How a collection run ended.
///
/// Both variants are normal termination; failures surface as
/// [`ScrapeError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The site answered 404 before the page bound was reached. `last_page`
    /// is the last page that was actually fetched (`start_page - 1` if even
    /// the first page was absent).
    EndOfPagination { last_page: u32 },
    /// Every page up to and including the configured bound was fetched.
    BoundReached { end_page: u32 },
}

/// Result of a full collection run: the records (header first) plus how
/// the run terminated.
#[derive(Debug, Clone)]
pub struct ScrapeRun {
    pub records: Vec<TrackRecord>,
    pub termination: Termination,
}

/// Drives page-by-page retrieval of the Best New Tracks listing.
///
/// Pages are fetched strictly sequentially in increasing page order; no
/// page is ever revisited. The site signals end-of-pagination by answering
/// 404, which the collector consumes as normal termination. There is no
/// retry and no backoff here — if a retry policy is wanted it belongs in
/// the [`PageFetcher`] implementation.
///
/// # Examples
///
/// ```rust,no_run
/// use pitchfork_tracks::{HttpPageFetcher, Result, ScrapeConfig, TracksCollector};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let http_client = http_client::native::NativeClient::new();
///     let fetcher = HttpPageFetcher::new(Box::new(http_client));
///
///     let config = ScrapeConfig {
///         start_page: 1,
///         end_page: 5,
///         ..ScrapeConfig::default()
///     };
///     let collector = TracksCollector::with_config(Box::new(fetcher), config);
///
///     let records = collector.collect().await?;
///     assert_eq!(records[0].title, "title");
///     Ok(())
/// }
/// ```
pub struct TracksCollector {
    fetcher: Box<dyn PageFetcher>,
    parser: TrackParser,
    config: ScrapeConfig,
}

impl TracksCollector {
    /// Create a collector with the default configuration (pages 1..=300 of
    /// the live listing, verbose, aborting on malformed entries).
    pub fn new(fetcher: Box<dyn PageFetcher>) -> Self {
        Self::with_config(fetcher, ScrapeConfig::default())
    }

    pub fn with_config(fetcher: Box<dyn PageFetcher>, config: ScrapeConfig) -> Self {
        Self {
            fetcher,
            parser: TrackParser::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Collect all track records in the configured page range.
    ///
    /// The first element of a successful result is always the synthetic
    /// `("title", "artist")` header record.
    pub async fn collect(&self) -> Result<Vec<TrackRecord>> {
        self.collect_run().await.map(|run| run.records)
    }

    /// Like [`collect`](Self::collect), but also reports whether the run
    /// ended by discovering the end of the listing or by exhausting the
    /// configured page bound.
    ///
    /// ```rust,no_run
    /// # use pitchfork_tracks::{HttpPageFetcher, Termination, TracksCollector};
    /// # tokio_test::block_on(async {
    /// let http_client = http_client::native::NativeClient::new();
    /// let fetcher = HttpPageFetcher::new(Box::new(http_client));
    /// let collector = TracksCollector::new(Box::new(fetcher));
    ///
    /// let run = collector.collect_run().await?;
    /// match run.termination {
    ///     Termination::EndOfPagination { last_page } => {
    ///         println!("listing ended at page {last_page}");
    ///     }
    ///     Termination::BoundReached { end_page } => {
    ///         println!("page limit {end_page} reached");
    ///     }
    /// }
    /// # Ok::<(), pitchfork_tracks::ScrapeError>(())
    /// # });
    /// ```
    pub async fn collect_run(&self) -> Result<ScrapeRun> {
        let config = &self.config;

        // Fail fast on a bad range, before any network activity.
        if config.start_page < 1 || config.end_page < config.start_page {
            return Err(ScrapeError::InvalidRange {
                start_page: config.start_page,
                end_page: config.end_page,
            });
        }

        let mut records = vec![TrackRecord::header()];
        let mut page = config.start_page;

        let termination = loop {
            if page > config.end_page {
                if config.verbose {
                    log::info!("page limit {} reached", config.end_page);
                }
                break Termination::BoundReached {
                    end_page: config.end_page,
                };
            }

            let url = self.page_url(page);
            let body = match self.fetcher.fetch(&url).await {
                Ok(FetchOutcome::Body(body)) => body,
                Ok(FetchOutcome::NotFound) => {
                    if config.verbose {
                        log::info!("finished scraping at page {}", page - 1);
                    }
                    break Termination::EndOfPagination {
                        last_page: page - 1,
                    };
                }
                Err(ScrapeError::Http(message)) => {
                    return Err(ScrapeError::Transport { page, message });
                }
                Err(e) => return Err(e),
            };

            if config.verbose {
                log::info!("getting tracks from page {page}...");
            }

            let document = Html::parse_document(&body);
            let mut tracks =
                self.parser
                    .parse_listing_page(&document, page, config.malformed_entry_policy)?;
            records.append(&mut tracks);

            page += 1;
        };

        log::debug!(
            "collected {} records, terminated via {termination:?}",
            records.len() - 1
        );

        Ok(ScrapeRun {
            records,
            termination,
        })
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}?page={page}", self.config.base_url)
    }
}
