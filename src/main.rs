mod mastodon_api;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tootstats::report::{render_report, render_search_hit};
use tootstats::search::search_statuses;
use tootstats::{gather_stats, AppConfig, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::mastodon_api::MastodonClient;

#[derive(Parser)]
#[command(name = "tootstats", version, about = "Mastodon account statistics")]
struct Cli {
    /// Config file (default: $TOOTSTATS_CONFIG_PATH or ./tootstats.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate statistics about your account
    Stats(StatsArgs),
    /// Search your toots
    Search(SearchArgs),
    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone)]
struct StatsArgs {
    /// Show the top N items in each category
    #[arg(short, long)]
    top: Option<usize>,
    /// Only account for the N most recent toots (excluding replies & boosts)
    #[arg(short, long)]
    recent: Option<usize>,
    /// Display tables with N columns
    #[arg(long)]
    columns: Option<usize>,
}

#[derive(Args, Debug, Clone)]
struct SearchArgs {
    /// Text to look for
    token: String,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config, config_path) = AppConfig::load(cli.config)?;
    info!(path = %config_path.display(), "loaded configuration");

    match cli.command {
        Command::Stats(args) => run_stats(config, args).await,
        Command::Search(args) => run_search(config, args).await,
        Command::Config(ConfigCommand::Init { force }) => init_config(&config_path, force),
    }
}

async fn run_stats(mut config: AppConfig, args: StatsArgs) -> Result<()> {
    if let Some(top) = args.top {
        config.report.top = top;
    }
    if let Some(recent) = args.recent {
        config.report.recent = recent;
    }
    if let Some(columns) = args.columns {
        config.report.columns = columns;
    }
    config.validate()?;

    let client = MastodonClient::from_config(&config.server)?;
    let me = client.fetch_me().await?;
    info!(account = %me.acct, statuses = me.statuses_count, "loading toots");

    let progress = progress_bar(me.statuses_count, format!("Loading toots for {}", me.username));
    let stats = gather_stats(
        &client,
        &me,
        &config.fetch,
        config.report.recent,
        &progress,
    )
    .await?;
    progress.finish_and_clear();

    println!(
        "{}",
        render_report(&stats, config.report.top, config.report.columns)
    );
    Ok(())
}

async fn run_search(config: AppConfig, args: SearchArgs) -> Result<()> {
    config.validate()?;

    let client = MastodonClient::from_config(&config.server)?;
    let me = client.fetch_me().await?;

    let progress = progress_bar(me.statuses_count, format!("Searching toots for {}", args.token));
    let hits = search_statuses(
        &client,
        &me.id,
        &config.fetch,
        &args.token,
        &progress,
        |hit| progress.suspend(|| println!("\n{}", render_search_hit(&hit))),
    )
    .await?;
    progress.finish_and_clear();

    info!(hits, "search finished");
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(tootstats::AppError::config(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }
    AppConfig::default().write(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn progress_bar(total: u64, message: String) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template("{msg} {pos} of {len} [{bar:40}]") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
