// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// gitx repos <username> [-n <number>] [-l <language>]
//
// A few hidden options exist for testing and scripting. They also read
// GITX_* environment variables so tests can set them on the process:
// - --api-url  / GITX_API_URL:  talk to a different GitHub API root
// - --geometry / GITX_GEOMETRY: pretend the terminal is COLUMNSxROWS
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definitions
// - Enums: one variant per subcommand
// =============================================================================

use clap::{ArgAction, Parser, Subcommand};

use crate::github::{ALL_LANGUAGES, DEFAULT_API_URL};
use crate::render::Geometry;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "gitx",
    version,
    about = "Get your github repos state instantly",
    long_about = "gitx lists the public, non-fork repositories of a GitHub user as a table \
                  sized to your terminal."
)]
pub struct Cli {
    /// Increase log verbosity (-v for debug); RUST_LOG overrides this
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the (public) repositories of a GitHub user
    ///
    /// Example: gitx repos octocat -n 10 -l rust
    Repos {
        /// GitHub username whose repositories are listed
        #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
        username: String,

        /// Maximum number of repositories to list
        ///
        /// This is the page size requested from GitHub; filtering can leave fewer rows.
        #[arg(
            short,
            long,
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        number: u32,

        /// The language of the repository ("all" shows every language)
        #[arg(short, long, default_value = ALL_LANGUAGES)]
        language: String,

        /// Do not show the progress spinner
        #[arg(long)]
        no_progress: bool,

        /// Base URL of the GitHub REST API
        #[arg(long, env = "GITX_API_URL", default_value = DEFAULT_API_URL, hide = true)]
        api_url: String,

        /// Render for a COLUMNSxROWS display instead of querying the terminal
        #[arg(long, env = "GITX_GEOMETRY", hide = true)]
        geometry: Option<Geometry>,
    },
}
