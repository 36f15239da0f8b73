use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use serde::Serialize;
use services::{AppServices, AssessmentService, Clock, TrackMaintenanceService};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "study-buddy", about = "Study Buddy desktop app and catalog tools")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// SQLite database URL or path
    #[arg(long = "db", env = "BUDDY_DB_URL", default_value = "sqlite:dev.sqlite3", global = true)]
    db_url: String,

    /// Signed-in learner for the dashboard
    #[arg(long = "user", env = "BUDDY_USER_ID", global = true)]
    user_id: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Launch the desktop UI (default)
    Ui,
    /// Report every track slug and flag the malformed ones
    CheckAllSlugs,
    /// List every track's title and slug
    CheckSlugs,
    /// Repair the known malformed track slug
    FixTrackSlug,
}

struct DesktopApp {
    user_id: Option<String>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }

    fn assessments(&self) -> Arc<AssessmentService> {
        self.services.assessments()
    }

    fn track_maintenance(&self) -> Arc<TrackMaintenanceService> {
        self.services.track_maintenance()
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

/// `RUST_LOG` wins over the `-v` default.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn launch_ui(services: AppServices, user_id: Option<String>) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { user_id, services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Study Buddy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .init();

    let db_url = normalize_sqlite_url(&cli.db_url);
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url)
        .await
        .with_context(|| format!("opening {db_url}"))?;
    tracing::debug!(%db_url, "storage ready");

    let services = AppServices::from_storage(&storage, Clock::default());
    let maintenance = services.track_maintenance();

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => launch_ui(services, cli.user_id),
        Commands::CheckAllSlugs => print_json(&maintenance.check_all_slugs().await?)?,
        Commands::CheckSlugs => print_json(&maintenance.check_slugs().await?)?,
        Commands::FixTrackSlug => {
            let outcome = maintenance.fix_track_slug().await?;
            print_json(&outcome)?;
            if !outcome.success {
                tracing::info!("nothing to repair");
            }
        }
    }

    Ok(())
}
