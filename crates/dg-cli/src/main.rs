//! Dungeon layout generator
//!
//! Reads generation settings from a JSON file or the command line and
//! prints the resulting layout as JSON (or as an ASCII map).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use dg_core::layout::DoorStyleMode;
use dg_core::{GameRng, MapSettings, RoomRequest, generate_layout};

/// Generate a dungeon layout
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a dungeon layout", long_about = None)]
struct Args {
    /// Settings file (JSON); command-line values override it
    #[arg(short = 's', long = "settings")]
    settings: Option<PathBuf>,

    /// Seed for reproducible layouts (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Grid width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Room request, `size` or `size:roomType` (repeatable)
    #[arg(short = 'r', long = "room")]
    rooms: Vec<RoomRequest>,

    /// Door styling step
    #[arg(long = "door-styles", value_enum)]
    door_styles: Option<StyleArg>,

    /// Print an ASCII map instead of JSON
    #[arg(long = "ascii")]
    ascii: bool,

    /// Verbose logging (repeat for trace output)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    None,
    Weighted,
    Secrets,
}

impl From<StyleArg> for DoorStyleMode {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::None => DoorStyleMode::Unstyled,
            StyleArg::Weighted => DoorStyleMode::Weighted,
            StyleArg::Secrets => DoorStyleMode::WeightedWithSecrets,
        }
    }
}

/// Log level for a `-v` count: warnings, then debug, then trace
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Send `log` output to stderr; `RUST_LOG` overrides the `-v` level
fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Merge the settings file with command-line overrides
fn load_settings(args: &Args) -> Result<MapSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file {}", path.display()))?;
            serde_json::from_str::<MapSettings>(&json)
                .with_context(|| format!("Invalid settings file {}", path.display()))?
        }
        None => {
            let (Some(width), Some(height)) = (args.width, args.height) else {
                bail!("Either --settings or both --width and --height are required");
            };
            MapSettings::new(width, height, Vec::new())
        }
    };

    if let Some(width) = args.width {
        settings.grid_width = width;
    }
    if let Some(height) = args.height {
        settings.grid_height = height;
    }
    if !args.rooms.is_empty() {
        settings.rooms = args.rooms.clone();
    }
    if let Some(mode) = args.door_styles {
        settings.door_styles = mode.into();
    }

    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("generating with seed {}", rng.seed());

    let layout = generate_layout(&settings, &mut rng).context("Layout generation failed")?;
    log::debug!(
        "{} of {} rooms placed, {} doors",
        layout.rooms.len(),
        settings.rooms.len(),
        layout.door_count()
    );

    if args.ascii {
        print!("{}", layout.grid.dump());
    } else {
        let json = serde_json::to_string_pretty(&layout).context("Failed to encode layout")?;
        println!("{json}");
    }

    Ok(())
}
