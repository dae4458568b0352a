//! Integration tests for the titlecaps CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn titlecaps() -> Command {
    Command::cargo_bin("titlecaps").unwrap()
}

#[test]
fn test_stdin_default_style_is_chicago() {
    titlecaps()
        .args(["--no-config", "--stdin"])
        .write_stdin("gone with the wind\n")
        .assert()
        .success()
        .stdout("Gone with the Wind\n");
}

#[test]
fn test_stdin_with_style_name() {
    titlecaps()
        .args(["--no-config", "--stdin", "-s", "ap4"])
        .write_stdin("gone with the wind\nwar of the worlds\n")
        .assert()
        .success()
        .stdout("Gone With the Wind\nWar of the Worlds\n");
}

#[test]
fn test_stdin_with_mode_number() {
    titlecaps()
        .args(["--no-config", "--stdin", "--style", "3"])
        .write_stdin("life with father")
        .assert()
        .success()
        .stdout("Life with Father");
}

#[test]
fn test_out_of_range_mode_is_chicago() {
    titlecaps()
        .args(["--no-config", "--stdin", "--style", "9"])
        .write_stdin("walk through walls\n")
        .assert()
        .success()
        .stdout("Walk through Walls\n");
}

#[test]
fn test_literal_style_passes_through() {
    titlecaps()
        .args(["--no-config", "--stdin", "-s", "literal"])
        .write_stdin("leave ME alone\n")
        .assert()
        .success()
        .stdout("leave ME alone\n");
}

#[test]
fn test_unknown_style_is_rejected() {
    titlecaps()
        .args(["--no-config", "--stdin", "-s", "mla"])
        .write_stdin("anything\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown style"));
}

#[test]
fn test_convert_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titles.txt");
    fs::write(&path, "the cat's toy\ncall at&t now\n").unwrap();

    titlecaps()
        .arg("--no-config")
        .arg(&path)
        .assert()
        .success()
        .stdout("The Cat's Toy\nCall AT&T Now\n");

    // The file itself is left alone.
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "the cat's toy\ncall at&t now\n"
    );
}

#[test]
fn test_write_mode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titles.txt");
    fs::write(&path, "star wars: a new hope\n").unwrap();

    titlecaps()
        .args(["--no-config", "--write"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Star Wars: A New Hope\n"
    );
}

#[test]
fn test_check_mode_fails_on_unconverted_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titles.txt");
    fs::write(&path, "kramer vs. kramer\n").unwrap();

    titlecaps()
        .args(["--no-config", "--check"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in title case"));
}

#[test]
fn test_check_mode_passes_on_converted_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titles.txt");
    fs::write(&path, "Kramer vs. Kramer\n").unwrap();

    titlecaps()
        .args(["--no-config", "--check"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_check_mode_stdin() {
    titlecaps()
        .args(["--no-config", "--check", "--stdin"])
        .write_stdin("a tale of two cities\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<stdin>: not in title case"));
}

#[test]
fn test_diff_mode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("titles.txt");
    fs::write(&path, "war of the worlds\nThe Hobbit\n").unwrap();

    titlecaps()
        .args(["--no-config", "--diff"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("-war of the worlds"))
        .stdout(predicate::str::contains("+War of the Worlds"))
        .stdout(predicate::str::contains("(title case)"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    titlecaps()
        .arg("--no-config")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn test_config_file_style() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".titlecaps.toml"), "style = \"ap4\"\n").unwrap();
    fs::write(temp_dir.path().join("titles.txt"), "life with father\n").unwrap();

    titlecaps()
        .current_dir(temp_dir.path())
        .arg("titles.txt")
        .assert()
        .success()
        .stdout("Life With Father\n");
}

#[test]
fn test_command_line_style_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".titlecaps.toml"), "style = 2\n").unwrap();
    fs::write(temp_dir.path().join("titles.txt"), "life with father\n").unwrap();

    titlecaps()
        .current_dir(temp_dir.path())
        .args(["--style", "chicago", "titles.txt"])
        .assert()
        .success()
        .stdout("Life with Father\n");
}

#[test]
fn test_config_include_patterns() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".titlecaps.toml"),
        "include = [\"*.txt\"]\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("a.txt"), "the end\n").unwrap();
    fs::write(temp_dir.path().join("b.md"), "not me\n").unwrap();

    titlecaps()
        .current_dir(temp_dir.path())
        .arg("--write")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(),
        "The End\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("b.md")).unwrap(),
        "not me\n"
    );
}

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "style = \"ap5\"\n").unwrap();

    titlecaps()
        .arg("--config")
        .arg(&config)
        .arg("--stdin")
        .write_stdin("walk through walls\n")
        .assert()
        .success()
        .stdout("Walk Through Walls\n");
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "style = [1, 2]\n").unwrap();

    titlecaps()
        .arg("--config")
        .arg(&config)
        .arg("--stdin")
        .write_stdin("anything\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading configuration"));
}

#[test]
fn test_interactive_literal_keeps_first_line() {
    titlecaps()
        .args(["--no-config", "-i", "-s", "literal"])
        .write_stdin("war of the worlds\nwar of the worlds, part two\n")
        .assert()
        .success()
        .stdout("war of the worlds\nwar of the worlds\n");
}

#[test]
fn test_interactive_style_switch() {
    titlecaps()
        .args(["--no-config", "-i", "-s", "1"])
        .write_stdin("war of the worlds\n:style ap4\n:style literal\n")
        .assert()
        .success()
        .stdout("war of the worlds\nWar of the Worlds\nwar of the worlds\n");
}

#[test]
fn test_interactive_reset() {
    titlecaps()
        .args(["--no-config", "-i", "-s", "literal"])
        .write_stdin("first\n:reset\nsecond\n")
        .assert()
        .success()
        .stdout("first\nsecond\n");
}

#[test]
fn test_interactive_conflicts_with_write() {
    titlecaps()
        .args(["--no-config", "-i", "--write", "titles.txt"])
        .assert()
        .failure();
}
