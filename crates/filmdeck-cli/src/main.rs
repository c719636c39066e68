//! filmdeck - browse TMDB movies, TV series and people from the terminal.

/// Application configuration (TOML).
mod config;
/// Log output routing.
mod logging;
/// Log-printing surface for one-shot commands.
mod surface;
/// Terminal UI components.
mod tui;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filmdeck_api::tmdb::TmdbClient;
use filmdeck_pipeline::{Outcome, Pipeline, PipelineSettings};
use tracing::instrument;

use crate::config::{AppConfig, resolve_config_path};
use crate::logging::LogSink;
use crate::surface::LogSurface;
use crate::tui::state::BrowserState;
use crate::tui::{ScreenSurface, run_browser};

/// Environment variable holding the TMDB API key.
const API_KEY_ENV: &str = "TMDB_API_KEY";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the first 10 top-rated movies.
    TopRated,
    /// Show the first 10 popular movies.
    Popular,
    /// Search movies and TV series.
    Search(QueryArgs),
    /// Search persons.
    Person(QueryArgs),
    /// Show movie details.
    Movie(IdArgs),
    /// Show TV series details.
    Tv(IdArgs),
    /// Show a person's three best-rated credits.
    Credits(IdArgs),
    /// Browse interactively via TUI.
    Browse,
}

/// Arguments for the search subcommands.
#[derive(clap::Args)]
struct QueryArgs {
    /// Search query (e.g. "inception").
    #[arg(long, required = true)]
    query: String,
}

/// Arguments for the detail and credits subcommands.
#[derive(clap::Args)]
struct IdArgs {
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Loads the config file from `--dir` or the default location.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    tracing::debug!(path = %config_path.display(), "loading config");
    AppConfig::load(&config_path).context("failed to load config")
}

/// Builds a `TmdbClient` from the `TMDB_API_KEY` environment variable and
/// the config file.
///
/// # Errors
///
/// Returns an error if `TMDB_API_KEY` is not set, the configured base URL
/// is invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(config: &AppConfig) -> Result<TmdbClient> {
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} environment variable is required"))?;

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(base_url) = config.tmdb_base_url()? {
        builder = builder.base_url(base_url);
    }
    builder.build().context("failed to build TMDB client")
}

/// Builds the client and settings shared by every network command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the client fails to build.
fn prepare(dir: Option<&PathBuf>) -> Result<(TmdbClient, PipelineSettings)> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config)?;
    Ok((client, config.pipeline_settings()))
}

/// Runs a one-shot command against the log surface.
///
/// A failed fetch has already been reported on the surface and does not
/// change the exit status.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the client fails to build.
#[instrument(skip_all)]
async fn run_command(command: Commands, dir: Option<&PathBuf>) -> Result<Outcome> {
    let (client, settings) = prepare(dir)?;
    let pipeline = Pipeline::new(client, LogSurface, settings);

    let outcome = match command {
        Commands::TopRated => pipeline.list_top_rated().await,
        Commands::Popular => pipeline.list_popular().await,
        Commands::Search(args) => pipeline.search_multi(&args.query).await,
        Commands::Person(args) => pipeline.search_person(&args.query).await,
        Commands::Movie(args) => pipeline.fetch_movie_detail(args.id).await,
        Commands::Tv(args) => pipeline.fetch_tv_detail(args.id).await,
        Commands::Credits(args) => pipeline.fetch_person_credits(args.id).await,
        Commands::Browse => {
            anyhow::bail!("browse is not a one-shot command");
        }
    };

    tracing::debug!(?outcome, "command finished");
    Ok(outcome)
}

/// Runs the `browse` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the TUI fails.
#[instrument(skip_all)]
async fn run_browse(dir: Option<&PathBuf>) -> Result<()> {
    let (client, settings) = prepare(dir)?;
    let state = Rc::new(RefCell::new(BrowserState::new()));
    let pipeline = Pipeline::new(client, ScreenSurface::new(Rc::clone(&state)), settings);

    run_browser(pipeline, state)
        .await
        .context("browser TUI failed")
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or subcommand execution
/// fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let browse = matches!(cli.command, Commands::Browse);
    logging::init(&LogSink::for_command(browse, cli.dir.as_ref())?)?;

    match cli.command {
        Commands::Browse => run_browse(cli.dir.as_ref()).await,
        command => run_command(command, cli.dir.as_ref()).await.map(|_| ()),
    }
}
