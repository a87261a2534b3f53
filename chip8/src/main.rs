use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// The keypad is mapped onto 1234/QWER/ASDF/ZXCV; Escape quits.
/// Set RUST_LOG (e.g. RUST_LOG=chip8_core=trace) to see what the CPU is doing.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Size of each Chip-8 pixel in screen pixels
    #[arg(short, long, default_value_t = 10)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args.rom, args.scale)
}
