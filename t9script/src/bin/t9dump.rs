use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use t9script::compile_layout_file;
use t9script::t9_core::KeyMap;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the character tables of a T9 layout", long_about = None)]
struct Args {
    /// Layout script (defaults to the built-in keypad)
    #[arg(short, long)]
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let keymap = match &args.layout {
        Some(path) => compile_layout_file(path)
            .with_context(|| format!("Failed to load layout {}", path.display()))?,
        None => KeyMap::standard(),
    };

    for (id, entry) in keymap.keys() {
        let lower: String = entry.lower.iter().collect();
        let upper: String = entry.upper.iter().collect();
        println!("{}: lower {:?} upper {:?} numeric {:?}", id, lower, upper, entry.numeric);

        if let Some(symbols) = &entry.long_press {
            let symbols: String = symbols.iter().collect();
            println!("    long-press {:?}", symbols);
        }
    }

    Ok(())
}
