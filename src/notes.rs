//! Persistent note editor
//!
//! One text buffer persisted verbatim to a single file. The editor appends
//! lines interactively and writes the whole buffer back on close, so the
//! file always equals the last buffer written.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::config::Config;
use crate::ui::{print_info, print_success};

/// Editor commands available at the prompt
const EDITOR_COMMANDS: &[(&str, &str)] = &[
    ("/show", "Print the numbered buffer"),
    ("/clear", "Empty the buffer"),
    ("/save", "Write the buffer without exiting"),
    ("/quit", "Save and exit"),
    ("/help", "List commands"),
];

/// In-memory note contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBuffer {
    lines: Vec<String>,
}

impl NoteBuffer {
    /// Load the buffer from `path`, or start empty if the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read note file {}", path.display()))?;
            Ok(Self::from_contents(&contents))
        } else {
            Ok(Self::default())
        }
    }

    /// Build a buffer from raw file contents
    pub fn from_contents(contents: &str) -> Self {
        Self {
            lines: contents.lines().map(str::to_string).collect(),
        }
    }

    /// Write the buffer's full contents to `path`, replacing the file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.contents())
            .with_context(|| format!("failed to write note file {}", path.display()))?;
        debug!("saved {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }

    /// Full contents as they appear on disk
    pub fn contents(&self) -> String {
        if self.lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", self.lines.join("\n"))
        }
    }

    /// Append one line
    pub fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Drop all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Run the interactive note editor
pub fn run(config: &Config, file: Option<&Path>) -> Result<()> {
    let path = file.unwrap_or(&config.files.note_file);
    let mut buffer = NoteBuffer::load(path)?;

    if buffer.is_empty() {
        print_info(&format!("New note: {}", path.display()));
    } else {
        print_info(&format!(
            "Loaded {} lines from {}",
            buffer.lines().len(),
            path.display()
        ));
    }
    println!("Type lines to append. /help lists editor commands, Ctrl+D saves and exits.");

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("note> ");

        match readline {
            Ok(line) => {
                let input = line.trim_end();
                match input {
                    "/help" => {
                        for (cmd, desc) in EDITOR_COMMANDS {
                            println!("  {:<8} {}", cmd, desc);
                        }
                    }
                    "/show" => {
                        if buffer.is_empty() {
                            println!("(empty)");
                        }
                        for (i, line) in buffer.lines().iter().enumerate() {
                            println!("{:>4}  {}", i + 1, line);
                        }
                    }
                    "/clear" => {
                        buffer.clear();
                        print_info("Buffer cleared");
                    }
                    "/save" => {
                        buffer.save(path)?;
                        print_success("Saved");
                    }
                    "/quit" => {
                        buffer.save(path)?;
                        print_success(&format!("Saved to {}", path.display()));
                        break;
                    }
                    _ => {
                        buffer.push_line(input);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Closing the editor always persists the buffer
                buffer.save(path)?;
                print_success(&format!("Saved to {}", path.display()));
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
