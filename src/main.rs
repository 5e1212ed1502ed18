//! shooter_board - create, sample, validate, inspect and convert board files.

mod display;

use std::io::stdout;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shooter_board::codec::{self, Format};
use shooter_board::compute::init_board;
use shooter_board::config::BoardConfig;
use shooter_board::entities::GameBoard;
use shooter_board::error::Result;
use shooter_board::sample::sample_board;
use shooter_board::validate::validate_board;

use display::Painter;

/// Tooling for shooter game board files (JSON or TOML).
#[derive(Parser)]
#[command(name = "shooter_board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty board from config defaults
    New {
        /// Board config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file; format follows its extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format used when writing to stdout
        #[arg(short, long, default_value = "json")]
        format: Format,
    },

    /// Generate a board filled with random entities
    Sample {
        /// Board config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of entities
        #[arg(short, long, default_value = "8")]
        entities: usize,

        /// RNG seed; random when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file; format follows its extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format used when writing to stdout
        #[arg(short, long, default_value = "json")]
        format: Format,
    },

    /// Check a board file against the board invariants
    Validate {
        /// Board file
        input: PathBuf,
    },

    /// Print a report of a board file
    Show {
        /// Board file
        input: PathBuf,
    },

    /// Convert a board file between JSON and TOML
    Convert {
        /// Source board file
        input: PathBuf,

        /// Destination board file
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for board output
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let color = !cli.no_color;

    match cli.command {
        Commands::New {
            config,
            output,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            emit(&init_board(&config), output.as_deref(), format)?;
        }

        Commands::Sample {
            config,
            entities,
            seed,
            output,
            format,
        } => {
            let config = load_config(config.as_deref())?;
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, entities, "sampling board");
            let board = sample_board(&config, entities, &mut StdRng::seed_from_u64(seed));
            emit(&board, output.as_deref(), format)?;
        }

        Commands::Validate { input } => {
            let board = codec::load_board(&input)?;
            let violations = validate_board(&board);
            let mut out = stdout();
            display::render_violations(&mut Painter::new(&mut out, color), &violations)?;
            // the report above already lists every problem
            if !violations.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Show { input } => {
            let board = codec::load_board(&input)?;
            let violations = validate_board(&board);
            let mut out = stdout();
            display::render_report(&mut Painter::new(&mut out, color), &board, &violations)?;
        }

        Commands::Convert { input, output } => {
            let board = codec::load_board(&input)?;
            codec::save_board(&output, &board)?;
            info!(
                from = %input.display(),
                to = %output.display(),
                "converted board"
            );
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    Ok(match path {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    })
}

/// Write `board` to `output`, or to stdout in `format` when no file is given.
fn emit(board: &GameBoard, output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            codec::save_board(path, board)?;
            info!(path = %path.display(), "wrote board");
        }
        None => println!("{}", codec::encode_board(board, format)?),
    }
    Ok(())
}
