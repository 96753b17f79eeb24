use clap::Parser;
use pitchfork_tracks::{
    write_songs_json, HttpPageFetcher, MalformedEntryPolicy, ScrapeConfig, Termination,
    TracksCollector,
};
use std::path::PathBuf;

/// Pitchfork Best New Tracks scraper
#[derive(Parser)]
#[command(
    name = "pitchfork-tracks",
    about = "Scrape Pitchfork's Best New Tracks listing into a JSON file",
    long_about = None
)]
struct Cli {
    /// Page number to start at
    #[arg(long, default_value_t = 1)]
    start_page: u32,

    /// Page number to stop at (inclusive); scraping usually ends earlier,
    /// when the listing runs out of pages
    #[arg(long, default_value_t = 300)]
    end_page: u32,

    /// Suppress per-page progress messages
    #[arg(long)]
    quiet: bool,

    /// Skip entries whose markup doesn't parse instead of aborting
    #[arg(long)]
    skip_malformed: bool,

    /// Output file path
    #[arg(long, default_value = "songs.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    let config = ScrapeConfig {
        start_page: args.start_page,
        end_page: args.end_page,
        verbose: !args.quiet,
        malformed_entry_policy: if args.skip_malformed {
            MalformedEntryPolicy::SkipAndLog
        } else {
            MalformedEntryPolicy::Abort
        },
        ..ScrapeConfig::default()
    };

    let http_client = http_client::native::NativeClient::new();
    let fetcher = HttpPageFetcher::new(Box::new(http_client));
    let collector = TracksCollector::with_config(Box::new(fetcher), config);

    let run = match collector.collect_run().await {
        Ok(run) => run,
        Err(e) => {
            eprintln!("❌ Scrape failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_songs_json(&args.output, &run.records) {
        eprintln!("❌ Failed to write {}: {e}", args.output.display());
        std::process::exit(1);
    }

    let track_count = run.records.len() - 1; // minus the header row
    match run.termination {
        Termination::EndOfPagination { last_page } => {
            println!(
                "Wrote {track_count} tracks to {} (listing ended at page {last_page})",
                args.output.display()
            );
        }
        Termination::BoundReached { end_page } => {
            println!(
                "Wrote {track_count} tracks to {} (page limit {end_page} reached)",
                args.output.display()
            );
        }
    }

    Ok(())
}
