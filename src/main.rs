//! VolSleuth — disk-usage browser for multi-partition storage.
//!
//! Thin binary entry point. All logic lives in the `volsleuth-core`
//! and `volsleuth-shell` crates; this file wires stdin commands to the
//! browser state and prints each rendered screen to stdout.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use volsleuth_core::config::EngineConfig;
use volsleuth_core::platform::{detect_in, VolumeCandidate};
use volsleuth_shell::command::HELP;
use volsleuth_shell::{export, render, BrowserState, Command, ParseError};

#[derive(Parser, Debug)]
#[command(name = "volsleuth", version, about = "Browse disk usage across storage volumes")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Mount point to probe instead of the built-in list (repeatable).
    #[arg(long = "volume", value_name = "LABEL=PATH")]
    volumes: Vec<VolumeCandidate>,

    /// Maximum rows per listing.
    #[arg(long)]
    max_items: Option<usize>,

    /// Accumulation depth bound.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialise structured logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::info!("VolSleuth starting");

    let mut config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    if !cli.volumes.is_empty() {
        config.volumes = Some(cli.volumes);
    }
    if let Some(n) = cli.max_items {
        config.max_items = n;
    }
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }

    let volumes = detect_in(&config.candidates()).context("cannot start without a volume")?;
    let mut state = BrowserState::new(volumes, &config);
    state.refresh();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    write!(out, "{}", render::render(&state))?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        state.status = None;

        let command = match Command::parse(&line) {
            Ok(c) => c,
            Err(ParseError::Empty) => {
                prompt(&mut out)?;
                continue;
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                prompt(&mut out)?;
                continue;
            }
        };

        if !dispatch(&mut state, command, &mut out)? {
            break;
        }

        settle(&mut state);
        write!(out, "{}", render::render(&state))?;
        prompt(&mut out)?;
    }

    tracing::info!("VolSleuth exiting");
    Ok(())
}

/// Apply one command. Returns `false` when the user asked to quit.
fn dispatch(
    state: &mut BrowserState,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let now = Instant::now();
    match command {
        Command::Refresh => state.refresh(),
        Command::Volume(index) => {
            if !state.select_volume(index, now) {
                state.status = Some(format!("No other volume {}", index + 1));
            }
        }
        Command::NextVolume => {
            state.next_volume(now);
        }
        Command::PrevVolume => {
            state.prev_volume(now);
        }
        Command::Enter(row) => {
            let row = row.unwrap_or(state.cursor);
            if !state.enter(row, now) && state.status.is_none() {
                state.status = Some(format!("Row {} is not a directory", row + 1));
            }
        }
        Command::Back => {
            if !state.back(now) {
                state.status = Some("Already at the volume root".to_string());
            }
        }
        Command::Move(delta) => state.move_cursor(delta),
        Command::Category(category) => state.set_category(category, now),
        Command::NextCategory => state.cycle_category(now),
        Command::Delete(row) => {
            let row = row.unwrap_or(state.cursor);
            if !state.request_delete(row) {
                state.status = Some(format!("Row {} cannot be deleted", row + 1));
            }
        }
        Command::Confirm => {
            if state.confirm_delete().is_none() {
                state.status = Some("Nothing to confirm".to_string());
            }
        }
        Command::Cancel => state.cancel_delete(),
        Command::Breakdown => {
            let breakdown = state.breakdown();
            write!(out, "{}", render::render_breakdown(&breakdown))?;
        }
        Command::Export(path) => {
            state.status = Some(match export_listing(state, &path) {
                Ok(()) => format!("Exported to {}", path.display()),
                Err(err) => format!("{err:#}"),
            });
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn export_listing(state: &BrowserState, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    export::write_csv(&state.listing, file)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

/// Wait out the settle delay, then run the deferred refresh.
///
/// Input is line-buffered, so a pending refresh can simply be awaited
/// before the next screen is drawn.
fn settle(state: &mut BrowserState) {
    if let Some(deadline) = state.refresh_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        state.tick(Instant::now());
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "volsleuth> ")?;
    out.flush()
}
