//! Command line front end for the link helper.
//!
//! # Usage
//!
//! ```bash
//! # Copy a (shortened) track link
//! cargo run -- track --artist Pixies --title Debaser
//!
//! # Copy an artist or album link
//! cargo run -- artist Pixies
//! cargo run -- album Doolittle --artist Pixies
//!
//! # Copy the link recreating a dynamic playlist described in JSON
//! cargo run -- playlist station.json
//!
//! # Only print the link
//! cargo run -- artist Pixies --no-copy
//! ```
//!
//! # Environment Variables
//!
//! See [`tomalink::config`] for available options. A `.env` file in the
//! working directory is loaded first.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use tomalink::config::{self, Config};
use tomalink::domain::entities::{Album, Artist, DynamicPlaylist, Query, Track};
use tomalink::{AppState, CopyOutcome};

/// Builds deep links and copies them to the clipboard.
#[derive(Parser)]
#[command(name = "tomalink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link that opens a track
    Track {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short = 'a', long, default_value = "")]
        artist: String,

        #[arg(short = 'b', long, default_value = "")]
        album: String,

        /// Print the link without copying it
        #[arg(long)]
        no_copy: bool,
    },

    /// Link to an artist page
    Artist {
        name: String,

        /// Print the link without copying it
        #[arg(long)]
        no_copy: bool,
    },

    /// Link to an album page
    Album {
        name: String,

        /// Album artist (omitted for compilations)
        #[arg(short, long)]
        artist: Option<String>,

        /// Print the link without copying it
        #[arg(long)]
        no_copy: bool,
    },

    /// Link that recreates a dynamic playlist
    Playlist {
        /// JSON file describing the playlist
        file: PathBuf,

        /// Print the link without copying it
        #[arg(long)]
        no_copy: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let state = tomalink::app::build_state(&config);

    match cli.command {
        Commands::Track {
            title,
            artist,
            album,
            no_copy,
        } => handle_track(&state, Track::new(title, artist, album), no_copy).await?,
        Commands::Artist { name, no_copy } => handle_artist(&state, Artist::new(name), no_copy)?,
        Commands::Album {
            name,
            artist,
            no_copy,
        } => handle_album(&state, Album::new(name, artist.map(Artist::new)), no_copy)?,
        Commands::Playlist { file, no_copy } => handle_playlist(&state, &file, no_copy)?,
    }

    Ok(())
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout only
/// carries links.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn handle_track(state: &AppState, track: Track, no_copy: bool) -> Result<()> {
    let query = Query::new(track);

    if no_copy {
        let link = state.links().build_track_open_link_from_query(&query);
        println!("{}", link.to_encoded());
        return Ok(());
    }

    let outcome = state
        .clipboard
        .copy_track_link_and_wait(&query)
        .await
        .context("Failed to copy track link")?;

    match outcome {
        CopyOutcome::Copied { text, shortened } => {
            let label = if shortened { "short link" } else { "link" };
            println!("{} {}", format!("Copied {label}:").green().bold(), text.cyan());
        }
        CopyOutcome::Superseded => {
            println!("{}", "Link request was superseded".yellow());
        }
    }

    Ok(())
}

fn handle_artist(state: &AppState, artist: Artist, no_copy: bool) -> Result<()> {
    if no_copy {
        println!("{}", state.links().build_artist_link(&artist).to_encoded());
        return Ok(());
    }

    let link = state
        .clipboard
        .copy_simple_link_to_clipboard(&artist)
        .context("Failed to copy artist link")?;
    print_copied(&link.to_encoded());

    Ok(())
}

fn handle_album(state: &AppState, album: Album, no_copy: bool) -> Result<()> {
    if no_copy {
        println!("{}", state.links().build_album_link(&album).to_encoded());
        return Ok(());
    }

    let link = state
        .clipboard
        .copy_simple_link_to_clipboard(&album)
        .context("Failed to copy album link")?;
    print_copied(&link.to_encoded());

    Ok(())
}

fn handle_playlist(state: &AppState, file: &Path, no_copy: bool) -> Result<()> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let playlist: DynamicPlaylist = serde_json::from_str(&json)
        .with_context(|| format!("Invalid playlist description in {}", file.display()))?;

    let link = state
        .links()
        .try_build_dynamic_playlist_link(&playlist)
        .with_context(|| format!("Cannot link playlist '{}'", playlist.title))?;

    if no_copy {
        println!("{}", link.to_encoded());
        return Ok(());
    }

    state
        .clipboard
        .copy_dynamic_playlist_link_to_clipboard(&playlist)
        .context("Failed to copy playlist link")?;
    print_copied(&link.to_encoded());

    Ok(())
}

fn print_copied(link: &str) {
    println!("{} {}", "Copied link:".green().bold(), link.cyan());
}
