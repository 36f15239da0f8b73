use clap::Parser;
use practice_core::model::TrackDraft;
use storage::repository::{Storage, StorageError};
use tracing_subscriber::EnvFilter;

/// Catalog loaded into a fresh database.
const DEFAULT_TRACKS: &[(&str, &str)] = &[
    ("Prompt Foundations", "prompt-foundations"),
    ("Few-Shot Patterns", "few-shot-patterns"),
    ("Chain of Thought", "chain-of-thought"),
    ("Prompt Optimization & Debugging", "prompt-optimization-debugging"),
    ("Evaluating Outputs", "evaluating-outputs"),
];

/// Slug the creator studio once produced for the optimization track.
const LEGACY_MALFORMED_SLUG: &str = "prompt-optimization--debugging";

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Load the default practice-track catalog")]
struct Args {
    /// SQLite URL
    #[arg(long = "db", env = "BUDDY_DB_URL", default_value = "sqlite:dev.sqlite3")]
    db_url: String,

    /// Store the optimization track under its legacy malformed slug
    #[arg(long)]
    with_malformed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let storage = Storage::sqlite(&args.db_url).await?;

    let mut inserted = 0_usize;
    for &(title, slug) in DEFAULT_TRACKS {
        let slug = if args.with_malformed && slug == "prompt-optimization-debugging" {
            LEGACY_MALFORMED_SLUG
        } else {
            slug
        };
        let track = TrackDraft::new(title, slug).validate()?;
        match storage.tracks.insert_track(track).await {
            Ok(id) => {
                tracing::debug!(%id, slug, "inserted track");
                inserted += 1;
            }
            Err(StorageError::Conflict) => tracing::info!(slug, "track already present"),
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!(inserted, db = %args.db_url, "seeded practice tracks");
    Ok(())
}
