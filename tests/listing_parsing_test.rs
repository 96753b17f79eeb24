use pitchfork_tracks::{
    Html, MalformedEntryPolicy, Result, ScrapeError, TrackParser, TrackRecord,
};

/// A page mixing both entry-link template variants, in document order.
const MIXED_PAGE: &str = r##"
<html><body>
  <div class="review">
    <a class="title-link" href="/reviews/best/tracks/alpha/">
      <h2>“Alpha Anthem”</h2>
      <ul><li>First Artist</li><li>Second Artist</li></ul>
    </a>
  </div>
  <div class="track-collection-item">
    <a class="track-collection-item__track-link" href="/reviews/best/tracks/beta/">
      <h2>"Beta Ballad"</h2>
      <ul><li>Solo Artist</li></ul>
    </a>
  </div>
</body></html>
"##;

fn parse(html: &str, policy: MalformedEntryPolicy) -> Result<Vec<TrackRecord>> {
    let document = Html::parse_document(html);
    TrackParser::new().parse_listing_page(&document, 1, policy)
}

#[test]
fn both_template_variants_are_matched_in_document_order() -> Result<()> {
    let records = parse(MIXED_PAGE, MalformedEntryPolicy::Abort)?;

    assert_eq!(records.len(), 2, "both variants should produce a record");
    assert_eq!(records[0], TrackRecord::new("Alpha Anthem", "First Artist, Second Artist"));
    assert_eq!(records[1], TrackRecord::new("Beta Ballad", "Solo Artist"));
    Ok(())
}

#[test]
fn curly_and_straight_quotes_are_deleted_from_titles() -> Result<()> {
    let page = r##"
      <a class="title-link" href="#">
        <h2>&#8220;Song&#8221; "Name"</h2>
        <ul><li>Somebody</li></ul>
      </a>"##;
    let records = parse(page, MalformedEntryPolicy::Abort)?;

    assert_eq!(records[0].title, "Song Name");
    Ok(())
}

#[test]
fn artists_are_joined_with_comma_space_in_source_order() -> Result<()> {
    let page = r##"
      <a class="title-link" href="#">
        <h2>Posse Cut</h2>
        <ul><li>A</li><li>B</li><li>C</li></ul>
      </a>"##;
    let records = parse(page, MalformedEntryPolicy::Abort)?;

    assert_eq!(records[0].artist, "A, B, C");
    // k artists means exactly k-1 separators
    assert_eq!(records[0].artist.matches(", ").count(), 2);
    Ok(())
}

#[test]
fn empty_artist_list_yields_empty_string_not_omitted_record() -> Result<()> {
    let page = r##"
      <a class="title-link" href="#">
        <h2>Anonymous</h2>
        <ul></ul>
      </a>"##;
    let records = parse(page, MalformedEntryPolicy::Abort)?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].artist, "");
    Ok(())
}

#[test]
fn missing_headline_aborts_with_entry_location() {
    let page = r##"
      <a class="title-link" href="#">
        <h2>Fine Entry</h2>
        <ul><li>Somebody</li></ul>
      </a>
      <a class="title-link" href="#">
        <ul><li>Someone Else</li></ul>
      </a>"##;

    let err = parse(page, MalformedEntryPolicy::Abort).unwrap_err();
    match err {
        ScrapeError::MalformedEntry { page, index, .. } => {
            assert_eq!(page, 1);
            assert_eq!(index, 1);
        }
        other => panic!("expected MalformedEntry, got {other:?}"),
    }
}

#[test]
fn missing_artist_list_is_malformed() {
    let page = r##"
      <a class="track-collection-item__track-link" href="#">
        <h2>No Artists Listed</h2>
      </a>"##;

    let err = parse(page, MalformedEntryPolicy::Abort).unwrap_err();
    assert!(matches!(err, ScrapeError::MalformedEntry { .. }));
}

#[test]
fn skip_and_log_policy_keeps_well_formed_entries() -> Result<()> {
    let page = r##"
      <a class="title-link" href="#">
        <ul><li>Orphaned Artist</li></ul>
      </a>
      <a class="title-link" href="#">
        <h2>Survivor</h2>
        <ul><li>Somebody</li></ul>
      </a>"##;

    let records = parse(page, MalformedEntryPolicy::SkipAndLog)?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Survivor");
    Ok(())
}

#[test]
fn page_with_no_entry_links_produces_no_records() -> Result<()> {
    let page = "<html><body><p>Nothing to see here.</p></body></html>";
    let records = parse(page, MalformedEntryPolicy::Abort)?;
    assert!(records.is_empty());
    Ok(())
}
