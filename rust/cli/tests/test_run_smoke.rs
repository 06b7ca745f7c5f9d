//! End-to-end runs through the public `run` entry point with captured
//! streams.

use std::fs;

#[test]
fn no_arguments_shows_usage_and_fails() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(["parlor"], &mut out, &mut err);
    assert_eq!(code, 2);
    let err_text = String::from_utf8(err).unwrap();
    assert!(err_text.contains("Usage"), "clap usage goes to stderr");
}

#[test]
fn help_prints_to_stdout_and_succeeds() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(["parlor", "--help"], &mut out, &mut err);
    assert_eq!(code, 0);
    let out_text = String::from_utf8(out).unwrap();
    assert!(out_text.contains("blackjack"));
    assert!(out_text.contains("roshambo"));
    assert!(err.is_empty());
}

#[test]
fn unknown_subcommand_fails() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(["parlor", "poker"], &mut out, &mut err);
    assert_eq!(code, 2);
}

#[test]
fn sim_roshambo_reports_a_summary() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(
        ["parlor", "sim", "--game", "roshambo", "--rounds", "30", "--seed", "9"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let out_text = String::from_utf8(out).unwrap();
    assert!(out_text.contains("Simulated 30 roshambo round(s)"));
}

#[test]
fn sim_rejects_zero_rounds() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(
        ["parlor", "sim", "--game", "blackjack", "--rounds", "0"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let err_text = String::from_utf8(err).unwrap();
    assert!(err_text.contains("rounds"));
}

#[test]
fn sim_blackjack_writes_jsonl_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(
        [
            "parlor",
            "sim",
            "--game",
            "blackjack",
            "--rounds",
            "5",
            "--seed",
            "7",
            "--output",
            path.to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(record["round_id"].as_str().unwrap().starts_with("sim-"));
        assert!(record["balance"].is_u64());
        assert!(record["ts"].is_string());
    }
}

#[test]
fn sim_output_supports_zstd_compression() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl.zst");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(
        [
            "parlor",
            "sim",
            "--game",
            "roshambo",
            "--rounds",
            "8",
            "--seed",
            "3",
            "--output",
            path.to_str().unwrap(),
        ],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);

    let compressed = fs::read(&path).unwrap();
    let decoded = zstd::decode_all(compressed.as_slice()).unwrap();
    let text = String::from_utf8(decoded).unwrap();
    assert_eq!(text.lines().count(), 8);
    for line in text.lines() {
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(record["player"].is_string());
        assert!(record["winner"].is_string());
    }
}

#[test]
fn identical_seeds_reproduce_identical_simulations() {
    let run_once = || {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = parlor_cli::run(
            ["parlor", "sim", "--game", "blackjack", "--rounds", "20", "--seed", "123"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    };
    assert_eq!(run_once(), run_once());
}
