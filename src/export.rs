//! Output serialization.
//!
//! The export format is a JSON array of 2-element arrays: the
//! `["title", "artist"]` header pair first, then one pair per record.
//! Compact encoding, UTF-8.

use crate::{Result, TrackRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the collected records to `path` as a JSON array of pairs.
///
/// Callers invoke this only after a fully successful (or normally
/// terminated) collection; a failed run never produces a partial file.
pub fn write_songs_json(path: impl AsRef<Path>, records: &[TrackRecord]) -> Result<()> {
    let rows: Vec<[&str; 2]> = records
        .iter()
        .map(|record| [record.title.as_str(), record.artist.as_str()])
        .collect();

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &rows)?;
    writer.flush()?;

    log::debug!(
        "wrote {} rows to {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(())
}
