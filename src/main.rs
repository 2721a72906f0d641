// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only)
// 3. Run the pipeline: fetch -> filter -> render
// 4. Print the table, or a short message saying which stage failed
//
// Exit codes:
//   0 = table printed, OR a fetch/render error was reported on stdout
//   2 = something unexpected broke (e.g. the spinner task panicked)
//   (clap uses 2 for usage errors as well)
//
// Rust concepts used:
// - async/await: the HTTP request and the spinner run on tokio
// - Result<T, E>: typed errors inside the pipeline, anyhow at the top
// - Trait objects: the renderer takes any DisplayGeometry
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - typed pipeline errors
mod github;   // src/github/ - fetching and filtering repositories
mod logging;  // src/logging.rs - tracing setup
mod progress; // src/progress.rs - spinner fed by stage events
mod render;   // src/render/ - table layout and centering

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use error::GitxError;
use github::Repository;
use progress::{Progress, Stage};
use render::{DisplayGeometry, FixedGeometry, Geometry, TerminalGeometry};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let exit_code = match run(cli.command).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<GitxError>() {
            // Pipeline errors are reported, not treated as a failed run
            Some(err) => {
                println!("{}: {err}", err.stage());
                0
            }
            None => {
                eprintln!("Error: {e:#}");
                2
            }
        },
    };

    std::process::exit(exit_code);
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Repos {
            username,
            number,
            language,
            no_progress,
            api_url,
            geometry,
        } => {
            let show_progress = !no_progress && console::Term::stderr().is_term();
            handle_repos(&api_url, &username, number, &language, show_progress, geometry).await
        }
    }
}

// Handles the 'repos' subcommand
async fn handle_repos(
    api_url: &str,
    username: &str,
    number: u32,
    language: &str,
    show_progress: bool,
    geometry: Option<Geometry>,
) -> Result<()> {
    let (progress, spinner) = if show_progress {
        let (progress, spinner) = progress::spawn_spinner();
        (progress, Some(spinner))
    } else {
        (Progress::disabled(), None)
    };

    // `progress` moves in and is dropped when the pipeline is done,
    // which is what lets the spinner task finish
    let collected = collect_repos(api_url, username, number, language, progress).await;

    if let Some(spinner) = spinner {
        spinner.finish().await.context("progress spinner task failed")?;
    }

    let repos = collected?;
    info!(username, language, count = repos.len(), "repositories ready");

    let display: Box<dyn DisplayGeometry> = match geometry {
        Some(geometry) => Box::new(FixedGeometry(geometry)),
        None => Box::new(TerminalGeometry::stdout()),
    };

    let table = render::render_repos(&repos, display.as_ref()).map_err(GitxError::from)?;
    println!("{table}");

    Ok(())
}

// Fetch then filter, announcing each stage
async fn collect_repos(
    api_url: &str,
    username: &str,
    number: u32,
    language: &str,
    progress: Progress,
) -> Result<Vec<Repository>, GitxError> {
    let fetched = github::fetch_repos(api_url, username, number, &progress).await?;

    progress.stage(Stage::Filtering);
    Ok(github::filter_repos(fetched, language))
}
