use assert_cmd::Command;
use predicates::prelude::*;

fn tickerbar() -> Command {
    Command::cargo_bin("tickerbar").unwrap()
}

#[test]
fn list_themes_in_registration_order() {
    let output = tickerbar().arg("--list-themes").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().map(|l| l[2..].trim()).collect();
    assert_eq!(
        names,
        vec![
            "default",
            "dark",
            "light",
            "solarized",
            "monokai",
            "dracula",
            "nord",
            "gruvbox",
            "tokyo-night",
            "catppuccin",
        ]
    );
    assert!(stdout.starts_with("* default"));
}

#[test]
fn list_themes_marks_selected_theme() {
    tickerbar()
        .args(["--theme", "nord", "--list-themes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* nord"))
        .stdout(predicate::str::contains("  default"));
}

#[test]
fn unknown_theme_fails() {
    tickerbar()
        .args(["--theme", "neon", "--list-themes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown theme 'neon'"));
}

#[test]
fn print_renders_status_line() {
    tickerbar()
        .args(["--print", "--width", "60", "--time", "09:15:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NASDAQ"))
        .stdout(predicate::str::contains("[24H]"))
        .stdout(predicate::str::contains("09:15:00  ? Help  q Quit"));
}

#[test]
fn print_message_beats_error() {
    tickerbar()
        .args([
            "--print",
            "--time",
            "09:15:00",
            "--error",
            "timeout",
            "--message",
            "Refreshing…",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshing…  ? Help  q Quit"))
        .stdout(predicate::str::contains("Error").not())
        .stdout(predicate::str::contains("09:15:00").not());
}

#[test]
fn print_error_shows_disconnected_glyph() {
    tickerbar()
        .args(["--print", "--time", "09:15:00", "--error", "timeout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○"))
        .stdout(predicate::str::contains("●").not())
        .stdout(predicate::str::contains(" Error  ? Help"));
}

#[test]
fn print_uses_provider_and_range() {
    tickerbar()
        .args(["--print", "--provider", "NYSE", "--range", "7d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NYSE"))
        .stdout(predicate::str::contains("[7D]"));
}

#[test]
fn print_zero_width_is_blank() {
    tickerbar()
        .args(["--print", "--width", "0"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn invalid_time_is_rejected() {
    tickerbar()
        .args(["--print", "--time", "9am"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HH:MM:SS"));
}

#[test]
fn log_file_records_theme_switch() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("tickerbar.log");

    tickerbar()
        .args(["--theme", "dracula", "--print", "--log"])
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Tickerbar"));
    assert!(contents.contains("Styles rebuilt for theme 'dracula'"));
}
