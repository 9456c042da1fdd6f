//! CLI frontend for the Guildhall class subsystem.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guildhall",
    about = "Guildhall: inspect classes, roll characters and simulate leveling",
    version,
    propagate_version = true
)]
struct Cli {
    /// TOML file with guild configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every class with its practice parameters
    Classes,

    /// Create and start a new character
    Roll {
        /// Class letter (m, c, b, w, h)
        class: String,

        /// RNG seed (default: from config)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show experience thresholds for a class
    Exp {
        /// Class letter (m, c, b, w, h)
        class: String,
    },

    /// Show the title for every level of a class
    Titles {
        /// Class letter (m, c, b, w, h)
        class: String,

        /// Show feminine titles
        #[arg(short, long)]
        female: bool,
    },

    /// List the spells or skills a class can use
    Abilities {
        /// Class letter (m, c, b, w, h)
        class: String,

        /// Character level
        #[arg(short, long, default_value = "30")]
        level: u8,
    },

    /// Start a character and promote it level by level
    Level {
        /// Class letter (m, c, b, w, h)
        class: String,

        /// Target level
        #[arg(short, long)]
        to: u8,

        /// RNG seed (default: from config)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Build a class membership mask from class letters
    Mask {
        /// Class letters, e.g. "mw"
        letters: String,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_env("GUILDHALL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Classes => commands::classes::run(),
        Commands::Roll { class, seed } => commands::roll::run(&config, &class, seed),
        Commands::Exp { class } => commands::exp::run(&class),
        Commands::Titles { class, female } => commands::titles::run(&class, female),
        Commands::Abilities { class, level } => commands::abilities::run(&class, level),
        Commands::Level { class, to, seed } => commands::level::run(&config, &class, to, seed),
        Commands::Mask { letters } => commands::mask::run(&letters),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
