//! Deskbox - Desk Utility Library
//!
//! Six small utilities behind one command dispatcher:
//! - Keyword-matching chatbot
//! - Number-guessing game
//! - Directory lister
//! - Audio file player
//! - Persistent note editor
//! - File-backed todo list
//!
//! # Example
//!
//! ```ignore
//! use deskbox::todo::TodoStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = TodoStore::new("todos.txt");
//!     store.add("buy milk")?;
//!     for (i, task) in store.list()?.iter().enumerate() {
//!         println!("{}. {}", i + 1, task);
//!     }
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod ui;
pub mod cli;

// Utility modules, one per subcommand
pub mod chat;
pub mod guess;
pub mod listing;
pub mod notes;
pub mod player;
pub mod todo;

// Re-export commonly used types for convenience
pub use config::Config;
pub use guess::{GuessGame, Outcome};
pub use listing::{Entry, ListError};
pub use notes::NoteBuffer;
pub use player::{PlaybackReport, PlayerError};
pub use todo::TodoStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - desk utility toolbox", NAME, VERSION)
}
