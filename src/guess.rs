//! Number-guessing game
//!
//! The program draws a secret integer in an inclusive range and the player
//! narrows it down. Unparseable input re-prompts and does not count as an
//! attempt.

use anyhow::{bail, Result};
use rand::Rng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::config::Config;
use crate::ui::{print_error, print_success};

/// Result of comparing one guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

/// One round of the guessing game
#[derive(Debug)]
pub struct GuessGame {
    secret: i64,
    low: i64,
    high: i64,
    attempts: u32,
}

impl GuessGame {
    /// Start a new game with a random secret in `low..=high`
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low > high {
            bail!("invalid range: {} is greater than {}", low, high);
        }

        let mut rng = rand::rng();
        let secret = rng.random_range(low..=high);
        debug!("new game over {}..={}", low, high);

        Ok(Self {
            secret,
            low,
            high,
            attempts: 0,
        })
    }

    /// Start a game with a known secret (used by tests)
    pub fn with_secret(secret: i64, low: i64, high: i64) -> Self {
        Self {
            secret,
            low,
            high,
            attempts: 0,
        }
    }

    /// Compare a guess against the secret and count the attempt
    pub fn check(&mut self, guess: i64) -> Outcome {
        self.attempts += 1;
        match guess.cmp(&self.secret) {
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Equal => Outcome::Correct,
        }
    }

    /// Number of parsed guesses so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Lower bound of the range (inclusive)
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Upper bound of the range (inclusive)
    pub fn high(&self) -> i64 {
        self.high
    }
}

/// Run an interactive game
///
/// CLI flags override the configured range.
pub fn run(config: &Config, min: Option<i64>, max: Option<i64>) -> Result<()> {
    let low = min.unwrap_or(config.guess.min);
    let high = max.unwrap_or(config.guess.max);
    let mut game = GuessGame::new(low, high)?;

    println!(
        "I picked a number between {} and {}. Can you guess it?",
        game.low(),
        game.high()
    );

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("guess> ");

        match readline {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let guess: i64 = match input.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        print_error("Please enter a valid integer");
                        continue;
                    }
                };

                match game.check(guess) {
                    Outcome::TooLow => println!("Too low"),
                    Outcome::TooHigh => println!("Too high"),
                    Outcome::Correct => {
                        let attempts = game.attempts();
                        print_success(&format!(
                            "Correct! You got it in {} attempt{}.",
                            attempts,
                            if attempts == 1 { "" } else { "s" }
                        ));
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("The number was {}.", game.secret);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
