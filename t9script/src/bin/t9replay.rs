use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use t9script::t9_core::{DecoderEngine, EngineConfig, KeyMap};
use t9script::{compile_layout_file, load_config, parse_events_file, replay};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a T9 event script and print the typed text", long_about = None)]
struct Args {
    /// Event script path
    events: PathBuf,

    /// Layout script (defaults to the built-in keypad)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// TOML engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cycle timeout in milliseconds, overrides the config file
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let keymap = match &args.layout {
        Some(path) => compile_layout_file(path)
            .with_context(|| format!("Failed to load layout {}", path.display()))?,
        None => KeyMap::standard(),
    };

    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(timeout) = args.timeout {
        config.cycle_timeout_ms = timeout;
    }

    let script = parse_events_file(&args.events)
        .with_context(|| format!("Failed to parse events {}", args.events.display()))?;
    info!("Replaying {} events with a {}ms cycle timeout", script.len(), config.cycle_timeout_ms);

    let engine = DecoderEngine::new(keymap, config).context("Invalid layout")?;
    let transcript = replay(engine, &script).context("Replay failed")?;

    for step in &transcript.steps {
        for notification in &step.output.notifications {
            println!("line {}: {}", step.line, notification);
        }
    }
    println!("{}", transcript.text);

    Ok(())
}
