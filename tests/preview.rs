use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

mod common;
use common::{SEASON_CSV, TestWorkspace};

#[test]
fn preview_shows_header_and_first_rows() {
    let ws = TestWorkspace::new();
    let input = ws.write("season.csv", SEASON_CSV);
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args(["preview", "-i", input.to_str().unwrap(), "--rows", "3"])
        .assert()
        .success()
        .stdout(
            contains("Player")
                .and(contains("Virat Kohli"))
                .and(contains("AB de Villiers"))
                .and(contains("Columns available: Player, TEAM, Runs, Wkts, SR, Avg, SOLD_PRICE")),
        )
        .stdout(contains("MS Dhoni").not());
}

#[test]
fn preview_trims_header_whitespace() {
    let ws = TestWorkspace::new();
    let input = ws.write(
        "padded.csv",
        " Player , TEAM ,Runs\nVirat Kohli,RCB,973\n",
    );
    Command::cargo_bin("ipl-stats")
        .expect("binary exists")
        .args(["preview", "-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Columns available: Player, TEAM, Runs"));
}
