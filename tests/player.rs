use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

mod common;
use common::{SEASON_CSV, TestWorkspace};

#[test]
fn player_lookup_is_case_insensitive_and_writes_charts() {
    let ws = TestWorkspace::new();
    let input = ws.write("season.csv", SEASON_CSV);
    let out_dir = ws.path().join("charts");
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args([
            "player",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
            "--name",
            "VIRAT KOHLI",
        ])
        .assert()
        .success()
        .stdout(contains("Performance Breakdown: Virat Kohli"));

    assert!(out_dir.join("Virat Kohli_runs.svg").exists());
    assert!(out_dir.join("Virat Kohli_pie_stats.svg").exists());
}

#[test]
fn unknown_player_is_a_benign_not_found() {
    let ws = TestWorkspace::new();
    let input = ws.write("season.csv", SEASON_CSV);
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args([
            "player",
            "-i",
            input.to_str().unwrap(),
            "-o",
            ws.path().join("charts").to_str().unwrap(),
            "--name",
            "Sachin Tendulkar",
        ])
        .assert()
        .success()
        .stdout(contains("No data found for player: Sachin Tendulkar"));
}

#[test]
fn all_zero_player_reports_no_displayable_data() {
    let ws = TestWorkspace::new();
    let csv = "\
Player,TEAM,Runs,Wkts,SR,Avg
Bench Warmer,RR,0,0,0,\u{2013}
Virat Kohli,RCB,973,0,152.03,81.08*
";
    let input = ws.write("season.csv", csv);
    let out_dir = ws.path().join("charts");
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args([
            "player",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
            "--name",
            "bench warmer",
        ])
        .assert()
        .success()
        .stdout(contains("No valid numeric data for bench warmer"));

    // The single-bar runs chart is still drawn; only the pie is skipped.
    assert!(out_dir.join("Bench Warmer_runs.svg").exists());
    assert!(!out_dir.join("Bench Warmer_pie_stats.svg").exists());
}

#[test]
fn missing_name_falls_back_to_the_interactive_prompt() {
    let ws = TestWorkspace::new();
    let input = ws.write("season.csv", SEASON_CSV);
    let out_dir = ws.path().join("charts");
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args([
            "player",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ])
        .write_stdin("ms dhoni\n")
        .assert()
        .success()
        .stdout(contains("Sample player names:").and(contains("Performance Breakdown: MS Dhoni")));

    assert!(out_dir.join("Ms Dhoni_runs.svg").exists());
}
