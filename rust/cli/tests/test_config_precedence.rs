mod helpers;

use helpers::{EnvGuard, run_cli};
use serde_json::Value;
use serial_test::serial;

fn cfg_json() -> Value {
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::clean();
    let json = cfg_json();
    assert_eq!(json["players"]["value"], serde_json::json!(["1", "2"]));
    assert_eq!(json["total_cards"]["value"].as_u64(), Some(40));
    assert_eq!(json["max_card_value"]["value"].as_u64(), Some(10));
    assert!(json["seed"]["value"].is_null());
    assert!(json["max_rounds"]["value"].is_null());
    for key in ["players", "total_cards", "max_card_value", "seed", "max_rounds"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"));
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cardwar.toml");
    std::fs::write(
        &path,
        "players = [\"ann\", \"bob\"]\ntotal_cards = 24\nseed = 456\n",
    )
    .unwrap();
    let path_str = path.to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("CARDWAR_CONFIG", path_str.as_str()), ("CARDWAR_SEED", "789")]);

    let json = cfg_json();
    assert_eq!(json["players"]["value"], serde_json::json!(["ann", "bob"]));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["total_cards"]["value"].as_u64(), Some(24));
    assert_eq!(json["total_cards"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["max_card_value"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn command_line_overrides_env() {
    let _env = EnvGuard::apply(&[("CARDWAR_SEED", "1"), ("CARDWAR_PLAYERS", "x, y ,z")]);

    let res = run_cli(&["deal", "--seed", "5"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Seed: 5\n"));
    assert!(res.stdout.contains("Player y (13 cards): "));

    let json = cfg_json();
    assert_eq!(json["players"]["value"], serde_json::json!(["x", "y", "z"]));
    assert_eq!(json["players"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn env_seed_makes_play_reproducible() {
    let _env = EnvGuard::apply(&[("CARDWAR_SEED", "31"), ("CARDWAR_MAX_ROUNDS", "50")]);
    let a = run_cli(&["play"]);
    let b = run_cli(&["play"]);
    assert_eq!(a.exit_code, 0);
    assert!(a.stdout.starts_with("play: players=1,2 cards=40 max_value=10 seed=31"));
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn malformed_env_value_is_a_config_error() {
    let _env = EnvGuard::apply(&[("CARDWAR_TOTAL_CARDS", "lots")]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid total cards"));
}

#[test]
#[serial]
fn unreadable_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let missing_str = missing.to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("CARDWAR_CONFIG", missing_str.as_str())]);
    let res = run_cli(&["play", "--seed", "1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "total_cards = \"forty\"\n").unwrap();
    let path_str = path.to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("CARDWAR_CONFIG", path_str.as_str())]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}
