//! Command-line front end for Sylla word addresses
//!
//! Encodes coordinates to four-word syllable addresses and back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use sylla_core::Hemisphere;

mod commands;
mod config;

use commands::OutputOptions;

#[derive(Parser)]
#[command(name = "sylla")]
#[command(about = "Sylla - speakable word addresses for coordinates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Codec config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Words per address, overriding config and environment
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print the processing trace as JSON to stderr
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode coordinates given in DD, DM or DMS notation
    Encode {
        /// Coordinate text, e.g. 49.7977543° N 18.2567507° E
        #[arg(required = true, num_args = 1..)]
        coordinates: Vec<String>,
    },

    /// Encode numeric degrees with explicit hemispheres
    EncodeNumeric {
        /// Latitude magnitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Latitude hemisphere (N or S)
        #[arg(long)]
        lat_hem: Hemisphere,

        /// Longitude magnitude in decimal degrees
        #[arg(long)]
        lng: f64,

        /// Longitude hemisphere (E or W)
        #[arg(long)]
        lng_hem: Hemisphere,
    },

    /// Decode a word address
    Decode {
        /// Words, e.g. ROBI SEME NERU RODI
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let codec = config::load_codec(cli.config.as_deref(), cli.precision)?;
    let output = OutputOptions {
        json: cli.json,
        trace: cli.trace,
    };

    let ok = match cli.command {
        Commands::Encode { coordinates } => {
            commands::encode(&codec, &coordinates.join(" "), output)?
        }
        Commands::EncodeNumeric {
            lat,
            lat_hem,
            lng,
            lng_hem,
        } => commands::encode_numeric(&codec, lat, lat_hem, lng, lng_hem, output)?,
        Commands::Decode { words } => commands::decode(&codec, &words.join(" "), output)?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
