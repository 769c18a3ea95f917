//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command running in `dir` with config/state isolated to `dir`
fn deskbox_in(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("deskbox").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

#[test]
fn no_subcommand_prints_usage() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deskbox"));
}

#[test]
fn todo_add_then_list_shows_task_last() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["todo", "add", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: buy milk"));

    deskbox_in(&dir)
        .args(["todo", "add", "water plants"])
        .assert()
        .success();

    deskbox_in(&dir)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. buy milk"))
        .stdout(predicate::str::contains("2. water plants"));
}

#[test]
fn todo_list_without_tasks() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet!"));
}

#[test]
fn todo_add_requires_text() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["todo", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn ls_lists_sorted_entries_with_dir_marker() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("beta.txt"), "").unwrap();
    std::fs::write(dir.path().join("alpha.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    deskbox_in(&dir)
        .args(["ls", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha.txt"))
        .stdout(predicate::str::contains("beta.txt"))
        .stdout(predicate::str::contains("sub/"));
}

#[test]
fn ls_missing_directory_reports_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["ls", "no-such-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn chat_recognizes_keywords_and_falls_back() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .arg("chat")
        .write_stdin("time\nbanana\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The current time is"))
        .stdout(predicate::str::contains("I don't understand"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn guess_reports_outcomes_and_reprompts_on_bad_input() {
    let dir = TempDir::new().unwrap();

    // A one-value range makes the secret known
    deskbox_in(&dir)
        .args(["guess", "--min", "5", "--max", "5"])
        .write_stdin("4\nabc\n6\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Too low"))
        .stdout(predicate::str::contains("Too high"))
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn note_saves_buffer_on_quit() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["note", "--file", "note.txt"])
        .write_stdin("hello\nworld\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to note.txt"));

    let contents = std::fs::read_to_string(dir.path().join("note.txt")).unwrap();
    assert_eq!(contents, "hello\nworld\n");
}

#[test]
fn note_round_trips_across_launches() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["note", "--file", "note.txt"])
        .write_stdin("persisted line\n/quit\n")
        .assert()
        .success();

    // Second launch loads the file and saves it back unchanged on close
    deskbox_in(&dir)
        .args(["note", "--file", "note.txt"])
        .write_stdin("/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 lines"));

    let contents = std::fs::read_to_string(dir.path().join("note.txt")).unwrap();
    assert_eq!(contents, "persisted line\n");
}

#[test]
fn play_missing_file_fails_with_message() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["play", "no-such-file.mp3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn config_show_prints_settings() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note_file"))
        .stdout(predicate::str::contains("todos.txt"));
}

#[test]
fn config_path_prints_location() {
    let dir = TempDir::new().unwrap();

    deskbox_in(&dir)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
