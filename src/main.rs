//! Fleet Tactics - Entry Point
//!
//! Speaks the game server protocol on stdin/stdout. Logs go to stderr.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fleet_tactics::battle::TacticalEngine;
use fleet_tactics::core::config::{load_config, EngineConfig};
use fleet_tactics::core::error::Result;
use fleet_tactics::session;

/// Fleet Tactics - turn-based 3D fleet battle bot
#[derive(Parser, Debug)]
#[command(name = "fleet-tactics")]
#[command(about = "Read draft and battle states from stdin, write commands to stdout")]
struct Args {
    /// Engine config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Battle turns spent moving into formation
    #[arg(long)]
    formation_turns: Option<u32>,

    /// Abort on undecodable input instead of skipping the turn
    #[arg(long)]
    strict: bool,

    /// Log filter directive, used when RUST_LOG is unset
    #[arg(long, default_value = "fleet_tactics=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for logging; stdout carries the protocol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(turns) = args.formation_turns {
        config.formation_turns = turns;
    }
    if args.strict {
        config.strict = true;
    }

    tracing::info!(
        formation_turns = config.formation_turns,
        seed = ?config.seed,
        strict = config.strict,
        "Fleet Tactics starting..."
    );

    let strict = config.strict;
    let mut engine = TacticalEngine::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut engine, stdin.lock(), stdout.lock(), strict)?;

    Ok(())
}
