//! Keyword-matching chatbot
//!
//! Recognizes two keywords on a trimmed, case-folded line: "time" answers
//! with the current local time, "exit" ends the session. Everything else
//! gets the fallback reply.

use anyhow::Result;
use chrono::Local;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::config::Config;
use crate::ui::print_success;

/// Keyword that ends the session
const EXIT_KEYWORD: &str = "exit";

/// Keyword that asks for the current time
const TIME_KEYWORD: &str = "time";

/// Format of the time reply
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reply classification for one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Current local time, already formatted
    Time(String),
    /// Session-ending farewell
    Farewell,
    /// The bot did not understand
    Fallback,
}

/// Classify one line of input
pub fn respond(input: &str) -> Reply {
    match input.trim().to_lowercase().as_str() {
        EXIT_KEYWORD => Reply::Farewell,
        TIME_KEYWORD => Reply::Time(Local::now().format(TIME_FORMAT).to_string()),
        _ => Reply::Fallback,
    }
}

/// Run an interactive chatbot session
pub fn run(config: &Config) -> Result<()> {
    println!(
        "Hello! I am {}. Type 'time' for the current time, 'exit' to leave.",
        config.chat.bot_name
    );

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("you> ");

        match readline {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(input);

                match respond(input) {
                    Reply::Time(now) => {
                        println!("The current time is {}", now);
                    }
                    Reply::Farewell => {
                        print_success("Goodbye!");
                        break;
                    }
                    Reply::Fallback => {
                        println!("I don't understand");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                print_success("Goodbye!");
                break;
            }
            Err(err) => {
                debug!("readline error: {}", err);
                return Err(err.into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_exit_keyword_is_farewell() {
        assert_eq!(respond("exit"), Reply::Farewell);
    }

    #[test]
    fn test_time_keyword_is_time() {
        let reply = respond("time");
        match reply {
            Reply::Time(formatted) => {
                // Must parse back with the exact format the bot prints
                NaiveDateTime::parse_from_str(&formatted, TIME_FORMAT)
                    .expect("time reply should match the advertised format");
            }
            other => panic!("expected a time reply, got {:?}", other),
        }
    }

    #[test]
    fn test_keywords_ignore_case_and_whitespace() {
        assert_eq!(respond("  EXIT  "), Reply::Farewell);
        assert!(matches!(respond("Time"), Reply::Time(_)));
        assert!(matches!(respond("\ttime\n"), Reply::Time(_)));
    }

    #[test]
    fn test_everything_else_is_fallback() {
        assert_eq!(respond("hello"), Reply::Fallback);
        assert_eq!(respond("what time is it"), Reply::Fallback);
        assert_eq!(respond("exit now"), Reply::Fallback);
        assert_eq!(respond("42"), Reply::Fallback);
    }
}
