use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rosewright-config"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_render_prints_markup() {
    let output = run(&["render", "--query", "second_hand=1&date_window_keys=a"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains(r#"<select name="second_hand" id="second_hand" data-role="slider">"#));
    assert!(stdout.contains(r#"id="save_b""#));
}

#[test]
fn test_cli_render_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.html");
    let output = run(&[
        "render",
        "--generation",
        "2.12",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"name="battery_gauge""#));
    assert!(!stdout_of(&output).contains("fieldcontain"));
}

#[test]
fn test_cli_submit_prints_json() {
    let output = run(&[
        "submit",
        "--generation",
        "2.12",
        "--query",
        "second_hand=1",
        "--form",
        "draw_mode=1&battery_gauge=abc",
    ]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["second_hand"], 1);
    assert_eq!(value["draw_mode"], 1);
    assert!(value.get("battery_gauge").is_none());
}

#[test]
fn test_cli_submit_accepts_full_url() {
    let output = run(&[
        "submit",
        "--query",
        "http://example.com/config.html?date_window_keys=ab&display_lang=de_DE",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(value["display_lang"], "de_DE");
    assert!(value.get("date_window_b").is_some());
}

struct ConfigDir {
    _dir: TempDir,
    path: String,
}

fn config_file(body: &str) -> ConfigDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.json");
    fs::write(&path, body).unwrap();
    ConfigDir {
        path: path.to_str().unwrap().to_string(),
        _dir: dir,
    }
}

#[test]
fn test_cli_config_file_sets_generation() {
    let cfg = config_file(r#"{"generation": "2.4"}"#);
    let output = run(&["describe", "--config", &cfg.path]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Generation 2.4:"));
    assert!(stdout.contains("keep_battery_gauge"));
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let cfg = config_file(r#"{"generation": "2.4"}"#);
    let output = run(&["describe", "--config", &cfg.path, "--generation", "3.6"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Generation 3.6:"));
    assert!(!stdout.contains("keep_battery_gauge"));
}

#[test]
fn test_cli_strings_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("de.csv");
    fs::write(&catalog, "key,value\n__SecondHand,Sekundenzeiger\n").unwrap();
    let output = run(&["render", "--strings", catalog.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(">Sekundenzeiger</label>"));
}

#[test]
fn test_cli_langs_table() {
    let output = run(&["langs", "--generation", "2.4"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("15 languages"));
    assert!(stdout.contains("Deutsch"));
}

#[test]
fn test_cli_rejects_unknown_generation() {
    let output = run(&["render", "--generation", "9.9"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_missing_config_file_fails() {
    let output = run(&["render", "--config", "/definitely/not/here.json"]);
    assert!(!output.status.success());
}
