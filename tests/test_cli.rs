use std::path::Path;
use std::process::{Command, Output};

use shooter_board::codec::save_board;
use shooter_board::compute::init_board;
use shooter_board::config::BoardConfig;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shooter_board"))
        .arg("--no-color")
        .args(args)
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_valid_board() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    save_board(&path, &init_board(&BoardConfig::default())).unwrap();

    let out = run(&["validate", path_str(&path)]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "valid\n");
}

#[test]
fn validate_fails_once_with_readable_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let mut board = init_board(&BoardConfig::default());
    board.size.width = -1.0;
    save_board(&path, &board).unwrap();

    let out = run(&["validate", path_str(&path)]);
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1 problem(s)"));
    assert!(stdout.contains("size.width must not be negative"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("Invalid("));
}

// ── convert ───────────────────────────────────────────────────────────────────

#[test]
fn convert_refuses_nan_into_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.toml");
    let output = dir.path().join("out.json");
    std::fs::write(
        &input,
        "enemySpawnRate = nan\nscaleMultiplier = 1.0\nscore = 0\nend = false\n\n\
         [size]\nwidth = 10.0\nheight = 10.0\n\n\
         [player]\nreloadSpeed = 1.0\ncolor = \"red\"\nscale = 1.0\nlife = 1\n",
    )
    .unwrap();

    let out = run(&["convert", path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    assert!(!output.exists());
}
