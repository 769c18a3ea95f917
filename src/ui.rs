//! Terminal output helpers shared by the interactive commands

use crossterm::{execute, style::{Color, Print, ResetColor, SetForegroundColor}};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// Print colored output
fn print_colored(text: &str, color: Color) {
    let _ = execute!(
        io::stdout(),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    );
    println!();
}

/// Print a success message
pub fn print_success(text: &str) {
    print_colored(text, Color::Green);
}

/// Print an info message
pub fn print_info(text: &str) {
    print_colored(text, Color::Cyan);
}

/// Print an error message
pub fn print_error(text: &str) {
    print_colored(text, Color::Red);
}

/// Create a spinner for the playback poll loop
pub fn playback_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.dim} {msg} ({elapsed})")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
