//! `timeline` CLI — lay out an event programme and audit it for room conflicts.
//!
//! ## Usage
//!
//! ```sh
//! # Hour-aligned window and row count (stdin → stdout)
//! cat sessions.json | timeline bounds
//!
//! # Full layout at a custom density, written to a file
//! timeline layout -i sessions.json -o layout.json --pixels-per-hour 120
//!
//! # Density from a TOML config file
//! timeline --config timeline.toml layout -i sessions.json
//!
//! # Report every room clash (exit status 1 if any)
//! timeline check -i sessions.json
//!
//! # Would this new or edited session fit?
//! timeline fits --candidate talk.json -i sessions.json
//! ```
//!
//! Sessions are a JSON array of `{id, start, end, room, kind}` objects;
//! `location` is accepted in place of `room`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use session_timeline::{
    find_all_conflicts, find_overlap, LayoutConfig, LayoutRect, Session, TimelineBounds,
    TimelineDescription, TimelineLayout,
};
use std::io::{self, Read};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "timeline",
    version,
    about = "Event day-schedule layout and room conflict checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file with layout settings (e.g. `pixels_per_hour = 80.0`)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hour-aligned timeline window
    Bounds {
        /// Sessions JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the timeline grid and a pixel rectangle per session
    Layout {
        /// Sessions JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Vertical pixels per hour; overrides the config file
        #[arg(long)]
        pixels_per_hour: Option<f64>,
    },
    /// Report every pair of sessions that share a room at the same time
    Check {
        /// Sessions JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Check whether one session fits the programme without a room clash
    Fits {
        /// JSON file holding the single candidate session
        #[arg(long)]
        candidate: String,
        /// Sessions JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Serialize)]
struct BoundsReport {
    #[serde(flatten)]
    bounds: TimelineBounds,
    hour_count: usize,
}

#[derive(Serialize)]
struct LayoutReport {
    timeline: TimelineDescription,
    sessions: Vec<LayoutRect>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Bounds { input } => {
            let sessions = read_sessions(input.as_deref())?;
            let layout = TimelineLayout::new(&sessions, &config)?;
            let report = BoundsReport {
                bounds: *layout.bounds(),
                hour_count: layout.mapper().hour_count(layout.bounds()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Layout {
            input,
            output,
            pixels_per_hour,
        } => {
            if let Some(pph) = pixels_per_hour {
                config.pixels_per_hour = pph;
            }
            let sessions = read_sessions(input.as_deref())?;
            let layout = TimelineLayout::new(&sessions, &config).context("Invalid layout settings")?;
            let report = LayoutReport {
                timeline: layout.describe(),
                sessions: layout.place_all(&sessions),
            };
            let pretty = serde_json::to_string_pretty(&report)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Check { input } => {
            let sessions = read_sessions(input.as_deref())?;
            let conflicts = find_all_conflicts(&sessions);
            if conflicts.is_empty() {
                println!("No room conflicts in {} sessions", sessions.len());
            } else {
                for c in &conflicts {
                    println!(
                        "Room '{}': '{}' overlaps '{}' by {} min",
                        c.room, c.candidate_id, c.existing_id, c.overlap_minutes
                    );
                }
                tracing::warn!(conflicts = conflicts.len(), "programme has room conflicts");
                process::exit(1);
            }
        }
        Commands::Fits { candidate, input } => {
            let raw = read_input(Some(candidate.as_str()))?;
            let candidate: Session = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid candidate session in {}", candidate))?;
            let sessions = read_sessions(input.as_deref())?;
            match find_overlap(&candidate, &sessions) {
                None => println!("'{}' fits", candidate.id()),
                Some(existing) => {
                    println!(
                        "'{}' conflicts with '{}' in room '{}'",
                        candidate.id(),
                        existing.id(),
                        existing.room()
                    );
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Install a compact stderr logger. `RUST_LOG` wins over `--verbose`.
fn init_logger(verbose: bool) {
    let default = if verbose {
        "session_timeline=debug,timeline=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_config(path: Option<&str>) -> Result<LayoutConfig> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            let config = LayoutConfig::from_toml_str(&source)
                .with_context(|| format!("Invalid config file: {}", path))?;
            tracing::debug!(path, pixels_per_hour = config.pixels_per_hour, "loaded config");
            Ok(config)
        }
        None => Ok(LayoutConfig::default()),
    }
}

fn read_sessions(path: Option<&str>) -> Result<Vec<Session>> {
    let json = read_input(path)?;
    let sessions: Vec<Session> =
        serde_json::from_str(&json).context("Failed to parse sessions JSON")?;
    tracing::debug!(count = sessions.len(), "read sessions");
    Ok(sessions)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
