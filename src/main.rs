use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use artifact_watch::catalog::load_catalog;
use artifact_watch::config::{
    self, DEFAULT_CATALOG_PATH, DEFAULT_NOTIFICATION_PATH, FETCH_TIMEOUT_MS, NotificationConfig,
};
use artifact_watch::logging;
use artifact_watch::notify::dispatcher_from_config;
use artifact_watch::report::{render_baselines, render_outcome};
use artifact_watch::version::database::Database;
use artifact_watch::version::resolvers::MavenResolver;
use artifact_watch::version::resolvers::maven::DEFAULT_MAVEN_REPOSITORY;
use artifact_watch::version::store::VersionStore;
use artifact_watch::watch::run_batch;

#[derive(Parser)]
#[command(name = "artifact-watch")]
#[command(version, about = "Watch Maven artifacts for newly published versions")]
struct Cli {
    /// Artifact catalog (JSON array of group_id/artifact_id objects)
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Notification settings (JSON)
    #[arg(long, default_value = DEFAULT_NOTIFICATION_PATH)]
    notification: PathBuf,

    /// Baseline database [default: $XDG_DATA_HOME/artifact-watch/versions.db]
    #[arg(long)]
    db: Option<PathBuf>,

    /// Base URL of the Maven repository
    #[arg(long, default_value = DEFAULT_MAVEN_REPOSITORY)]
    repository: String,

    /// Timeout for each metadata request, in milliseconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_MS as u64)]
    timeout_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print recorded versions, then check every catalog artifact (default)
    Check,
    /// Print recorded versions only
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_file.as_deref(), cli.log_json)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let db_path = cli.db.clone().unwrap_or_else(config::db_path);
    let db = Database::open(&db_path)
        .with_context(|| format!("failed to open version database {:?}", db_path))?;

    let listing = db.list_all();
    if let Some(Command::List) = cli.command {
        let records = listing.context("failed to read recorded versions")?;
        println!("{}", render_baselines(&records));
        db.close()?;
        return Ok(());
    }

    // A broken dump must not keep the catalog from being checked
    match listing {
        Ok(records) => println!("{}", render_baselines(&records)),
        Err(e) => {
            error!("Failed to read recorded versions: {}", e);
            println!("Recorded versions unavailable: {}\n", e);
        }
    }

    let artifacts = load_catalog(&cli.catalog)?;
    let notification = NotificationConfig::load(&cli.notification)?;
    let dispatcher = dispatcher_from_config(&notification)?;
    let resolver = MavenResolver::new(&cli.repository, Duration::from_millis(cli.timeout_ms))?;

    println!("New Versions:");
    let outcomes = run_batch(
        &db,
        &resolver,
        dispatcher.as_ref(),
        &notification.recipient,
        &artifacts,
    )
    .await;

    for outcome in &outcomes {
        println!("{}", render_outcome(outcome));
    }
    info!("Checked {} artifacts", outcomes.len());

    db.close()?;
    Ok(())
}
