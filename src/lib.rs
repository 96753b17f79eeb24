//! Scrape Pitchfork's "Best New Tracks" review listing into `(title, artist)`
//! records and export them as JSON.
//!
//! The crate is split along the seams of the problem: a [`PageFetcher`]
//! collaborator owns HTTP transport, [`TrackParser`] is pure HTML
//! extraction, and [`TracksCollector`] drives the pagination loop until the
//! configured bound is exhausted or the site reports the listing finished.

pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod parsing;
pub mod track;

pub use collector::{ScrapeRun, Termination, TracksCollector};
pub use config::{MalformedEntryPolicy, ScrapeConfig, DEFAULT_BASE_URL};
pub use error::ScrapeError;
pub use export::write_songs_json;
#[cfg(feature = "mock")]
pub use fetch::MockPageFetcher;
pub use fetch::{FetchOutcome, HttpPageFetcher, PageFetcher};
pub use parsing::TrackParser;
pub use track::TrackRecord;

// Re-export scraper types for testing
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, ScrapeError>;
