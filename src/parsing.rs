//! HTML parsing for the Best New Tracks listing.
//!
//! Pure functions over already-parsed `scraper::Html` documents; no I/O
//! happens here. Two entry-link template variants are in use on the site
//! and both are recognized.

use crate::{MalformedEntryPolicy, Result, ScrapeError, TrackRecord};
use scraper::{ElementRef, Html, Selector};

/// Both entry-link variants, matched together so a page mixing the two
/// templates yields its entries merged in document order.
const ENTRY_LINK_SELECTOR: &str = "a.title-link, a.track-collection-item__track-link";

/// Characters deleted (not replaced) from headline text.
const QUOTE_CHARS: [char; 3] = ['\u{201C}', '\u{201D}', '"'];

/// Parser for Best New Tracks listing pages.
///
/// Stateless; holds only parsing logic so it can be exercised against
/// saved HTML without a client.
#[derive(Debug, Clone, Default)]
pub struct TrackParser;

impl TrackParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract every track entry from one listing page.
    ///
    /// Entries whose internal structure doesn't match the known shapes are
    /// handled according to `policy`: abort the run, or log and skip.
    pub fn parse_listing_page(
        &self,
        document: &Html,
        page: u32,
        policy: MalformedEntryPolicy,
    ) -> Result<Vec<TrackRecord>> {
        let entry_selector = Selector::parse(ENTRY_LINK_SELECTOR).unwrap();

        let mut records = Vec::new();
        for (index, entry) in document.select(&entry_selector).enumerate() {
            match self.extract_track(entry, page, index) {
                Ok(record) => records.push(record),
                Err(e) => match policy {
                    MalformedEntryPolicy::Abort => return Err(e),
                    MalformedEntryPolicy::SkipAndLog => {
                        log::warn!("skipping: {e}");
                    }
                },
            }
        }

        log::debug!("parsed {} entries from page {page}", records.len());
        Ok(records)
    }

    /// Extract a single entry link into a [`TrackRecord`].
    ///
    /// The entry is expected to contain an `<h2>` headline and a `<ul>`
    /// whose `<li>` children each carry one artist name. Quote characters
    /// are deleted from the headline; artist names are joined with `", "`
    /// in document order. An entry with an empty artist list produces an
    /// empty `artist` string, not an omitted record.
    pub fn extract_track(&self, entry: ElementRef, page: u32, index: usize) -> Result<TrackRecord> {
        let headline_selector = Selector::parse("h2").unwrap();
        let headline = entry.select(&headline_selector).next().ok_or_else(|| {
            ScrapeError::MalformedEntry {
                page,
                index,
                reason: "missing <h2> headline".to_string(),
            }
        })?;

        let raw_title = headline.text().collect::<String>();
        if raw_title.is_empty() {
            return Err(ScrapeError::MalformedEntry {
                page,
                index,
                reason: "headline has no text".to_string(),
            });
        }
        let title = strip_quotes(&raw_title);

        let list_selector = Selector::parse("ul").unwrap();
        let artist_list = entry.select(&list_selector).next().ok_or_else(|| {
            ScrapeError::MalformedEntry {
                page,
                index,
                reason: "missing <ul> artist list".to_string(),
            }
        })?;

        let item_selector = Selector::parse("li").unwrap();
        let artist = artist_list
            .select(&item_selector)
            .map(|item| item.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(TrackRecord::new(title, artist))
    }
}

/// Delete every left/right curly double quote and straight double quote.
///
/// Deletion, not substitution: the characters leave no replacement behind.
/// Idempotent, since the output never contains any of the stripped characters.
fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
}
