//! File-backed todo list
//!
//! Append-only store over one flat text file: `add` appends a line, `list`
//! enumerates the file in append order. No IDs, no deletion, no edit.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;

/// Append-only todo store
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one task to the file, creating it if missing
    pub fn add(&self, task: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open todo file {}", self.path.display()))?;
        writeln!(file, "{}", task)
            .with_context(|| format!("failed to write todo file {}", self.path.display()))?;
        debug!("appended task to {}", self.path.display());
        Ok(())
    }

    /// Read all tasks in file-append order
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read todo file {}", self.path.display()))?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `todo add` entry point
pub fn run_add(config: &Config, task: &str) -> Result<()> {
    let store = TodoStore::new(&config.files.todo_file);
    store.add(task)?;
    println!("Added: {}", task);
    Ok(())
}

/// `todo list` entry point
pub fn run_list(config: &Config) -> Result<()> {
    let store = TodoStore::new(&config.files.todo_file);
    let tasks = store.list()?;

    if tasks.is_empty() {
        println!("No todos yet!");
        return Ok(());
    }

    for (i, task) in tasks.iter().enumerate() {
        println!("{}. {}", i + 1, task);
    }
    Ok(())
}
