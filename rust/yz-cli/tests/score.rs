use std::process::Command;

fn yz_bin() -> String {
    env!("CARGO_BIN_EXE_yz").to_string()
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(yz_bin()).args(args).output().unwrap()
}

#[test]
fn score_help_runs() {
    let out = run(&["score", "--help"]);
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.contains("yz score"));
}

#[test]
fn version_prints_crate_version() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.starts_with("yz "));
}

#[test]
fn score_single_category_prints_number() {
    let out = run(&["score", "--category", "two_pairs", "3", "3", "5", "4", "5"]);
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "16");
}

#[test]
fn score_accepts_comma_separated_dice() {
    let out = run(&["score", "--category", "small_straight", "2,3,4,5,1"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "15");
}

#[test]
fn score_full_card_lists_every_category() {
    let out = run(&["score", "1", "1", "2", "2", "2"]);
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.contains("Dice: 1 1 2 2 2"));
    for name in ["ones", "two_pairs", "full_house", "chance", "yatzy"] {
        assert!(s.contains(name), "missing {name} in:\n{s}");
    }
}

#[test]
fn score_json_output() {
    let out = run(&["score", "--json", "6", "2", "3", "4", "5"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["dice"], serde_json::json!([6, 2, 3, 4, 5]));
    assert_eq!(v["scores"]["large_straight"], 0);
    assert_eq!(v["scores"]["chance"], 20);
    assert_eq!(v["scores"].as_object().unwrap().len(), 15);
}

#[test]
fn invalid_hands_exit_nonzero() {
    let out = run(&["score", "1", "2", "3"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Required a dice roll of size 5"));

    let out = run(&["score", "1", "8", "-1", "3", "4"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Dice rolls must be between 1 and 6"));
}

#[test]
fn unknown_category_exits_nonzero() {
    let out = run(&["score", "--category", "bonus", "1", "2", "3", "4", "5"]);
    assert!(!out.status.success());
}

#[test]
fn log_flag_appends_score_events() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("events.ndjson");
    let log_s = log.to_str().unwrap();

    let out = run(&["score", "--log", log_s, "--category", "yatzy", "4", "4", "4", "4", "4"]);
    assert!(out.status.success());
    let out = run(&["score", "--log", log_s, "1", "2"]);
    assert!(!out.status.success());

    let text = std::fs::read_to_string(&log).unwrap();
    let vals: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(vals.len(), 2);
    assert_eq!(vals[0]["event"], "score");
    assert_eq!(vals[0]["category"], "yatzy");
    assert_eq!(vals[0]["score"], 50);
    assert_eq!(vals[1]["event"], "rejected_hand");
    assert_eq!(vals[1]["input"], "1 2");
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("yz.yaml");
    std::fs::write(&cfg, "output:\n  category: full_house\n").unwrap();
    let cfg_s = cfg.to_str().unwrap();

    let out = run(&["score", "--config", cfg_s, "6", "2", "2", "2", "6"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "18");

    let out = run(&["score", "--config", cfg_s, "--category", "pair", "6", "2", "2", "2", "6"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "12");
}

#[test]
fn categories_lists_fifteen() {
    let out = run(&["categories"]);
    assert!(out.status.success());
    let s = String::from_utf8_lossy(&out.stdout);
    assert_eq!(s.lines().count(), 15);
    assert!(s.lines().next().unwrap().contains("ones"));
    assert!(s.lines().last().unwrap().contains("yatzy"));
}

#[cfg(target_os = "linux")]
#[test]
fn rejected_hand_log_failure_is_reported() {
    // Writes to /dev/full fail with ENOSPC once flushed.
    let out = run(&["score", "--log", "/dev/full", "1", "2"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Failed to write event log"), "stderr:\n{err}");
    assert!(err.contains("Invalid hand"), "stderr:\n{err}");
}
