//! Configuration management
//!
//! Persistent settings for the utilities: file locations, the chatbot name,
//! the guessing range, and playback behavior.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locations of the persistence files
    #[serde(default)]
    pub files: FilesConfig,
    /// Chatbot settings
    #[serde(default)]
    pub chat: ChatConfig,
    /// Guessing-game settings
    #[serde(default)]
    pub guess: GuessConfig,
    /// Audio playback settings
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// Locations of the persistence files
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File the note editor persists to
    #[serde(default = "default_note_file")]
    pub note_file: PathBuf,
    /// File the todo list persists to
    #[serde(default = "default_todo_file")]
    pub todo_file: PathBuf,
}

fn default_note_file() -> PathBuf {
    PathBuf::from("note.txt")
}

fn default_todo_file() -> PathBuf {
    PathBuf::from("todos.txt")
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            note_file: default_note_file(),
            todo_file: default_todo_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Name the chatbot introduces itself with
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
}

fn default_bot_name() -> String {
    "deskbox".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Lower bound of the secret range (inclusive)
    #[serde(default = "default_guess_min")]
    pub min: i64,
    /// Upper bound of the secret range (inclusive)
    #[serde(default = "default_guess_max")]
    pub max: i64,
}

fn default_guess_min() -> i64 {
    1
}

fn default_guess_max() -> i64 {
    10
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: default_guess_min(),
            max: default_guess_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Sink volume, 0.0 to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// How often to check whether playback has finished
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_volume() -> f32 {
    1.0
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: Config = toml::from_str(&contents)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent()
            .context("Config path has no parent")?;

        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "deskbox", "deskbox")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Files:");
    println!("  note_file:         {}", config.files.note_file.display());
    println!("  todo_file:         {}", config.files.todo_file.display());
    println!("Chat:");
    println!("  bot_name:          {}", config.chat.bot_name);
    println!("Guess:");
    println!("  range:             {}..={}", config.guess.min, config.guess.max);
    println!("Playback:");
    println!("  volume:            {}", config.playback.volume);
    println!("  poll_interval_ms:  {}", config.playback.poll_interval_ms);

    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}
