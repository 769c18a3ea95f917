//! CLI interface for deskbox

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "deskbox")]
#[command(about = "Six small desk utilities behind one command dispatcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chatbot session
    Chat,
    /// Play a number-guessing game
    Guess {
        /// Lower bound of the secret range (inclusive)
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound of the secret range (inclusive)
        #[arg(long)]
        max: Option<i64>,
    },
    /// List the contents of a directory
    Ls {
        /// Directory to list (default: current directory)
        path: Option<PathBuf>,
    },
    /// Play an audio file to completion
    Play {
        /// Path to a playable audio file
        file: PathBuf,
        /// Playback volume, 0.0 to 1.0
        #[arg(short, long)]
        volume: Option<f32>,
    },
    /// Edit a persistent note
    Note {
        /// Note file to edit (default: note.txt in the working directory)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Manage the todo list
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
    /// Inspect the configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Print the configuration file path
        #[arg(long)]
        path: bool,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
enum TodoCommands {
    /// Add a task
    Add {
        /// Task text (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List all tasks
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Chat => {
            crate::chat::run(&config)?;
        }
        Commands::Guess { min, max } => {
            crate::guess::run(&config, min, max)?;
        }
        Commands::Ls { path } => {
            crate::listing::run(path.as_deref())?;
        }
        Commands::Play { file, volume } => {
            crate::player::run(&config, &file, volume)?;
        }
        Commands::Note { file } => {
            crate::notes::run(&config, file.as_deref())?;
        }
        Commands::Todo { command } => match command {
            TodoCommands::Add { text } => {
                crate::todo::run_add(&config, &text.join(" "))?;
            }
            TodoCommands::List => {
                crate::todo::run_list(&config)?;
            }
        },
        Commands::Config { show, path, reset } => {
            if reset {
                crate::config::reset_config()?;
            } else if path {
                println!("{}", crate::config::config_path()?.display());
            } else if show {
                crate::config::show_config()?;
            } else {
                println!("Configuration options:");
                println!("  --show    Display current configuration");
                println!("  --path    Print the configuration file path");
                println!("  --reset   Reset configuration to defaults");
            }
        }
    }

    Ok(())
}
