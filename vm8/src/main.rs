use std::path::PathBuf;
use std::process;

use clap::Parser;

use chip8::Quirks;

mod audio;
mod keymap;
mod run;

/// A Chip-8 virtual machine
#[derive(Parser)]
#[command(name = "vm8")]
struct Args {
    /// The rom to run
    rom: PathBuf,

    /// The size multiplier for each display pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Shift Vy instead of Vx in 8XY6 and 8XYE
    #[arg(long)]
    legacy_shift: bool,

    /// Wrap sprites at the display edges instead of clipping
    #[arg(long)]
    wrap_sprites: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let quirks = Quirks {
        legacy_shift: args.legacy_shift,
        wrap_sprites: args.wrap_sprites,
    };
    if let Err(err) = run::run(args.rom, args.scale, quirks) {
        eprintln!("vm8: {}", err);
        process::exit(1);
    }
}
