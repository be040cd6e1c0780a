#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[[stats]]
key = "gol"
direction = "higher"
reference_best = 30.0

[[stats]]
key = "pases_clave"
direction = "higher"
reference_best = 4.0

[[stats]]
key = "perdidas"
direction = "lower"
reference_best = 2.0

[profiles.attacker]
gol = 0.6
pases_clave = 0.2
perdidas = 0.2

[profiles.midfielder]
gol = 0.25
pases_clave = 0.5
perdidas = 0.25
"#;

const CARDS: &str = r#"[
  {"id": "1", "card_id": "c1", "player_name": "Lionel Messi", "season_text": "2022-2023",
   "season_end": 2023, "series": "base", "country": "Argentina", "club": "PSG",
   "overall": 95, "gol": 93, "asist": 96, "regate": 97, "pase": 94, "def": 35},
  {"id": "2", "card_id": "c2", "player_name": "Juan Roman Riquelme", "season_text": "2000-2001",
   "season_end": 2001, "series": "legend", "country": "Argentina", "club": "Boca",
   "overall": 91, "gol": 80, "asist": 97, "regate": 90, "pase": 96, "def": 40},
  {"id": "3", "card_id": "c3", "player_name": "Javier Mascherano", "season_text": "2009-2010",
   "season_end": 2010, "series": "base", "country": "Argentina", "club": "Liverpool",
   "overall": 86, "gol": 40, "asist": 70, "regate": 65, "pase": 84, "def": 92}
]"#;

fn write_config(root: &Path) {
    fs::write(root.join("rating.toml"), CONFIG).expect("config should write");
}

fn write(root: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = root.join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

#[test]
fn validate_reports_statistics_and_profiles() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("validate")
        .arg(root.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("3 statistic(s)"))
        .stdout(predicate::str::contains("attacker, midfielder"));
}

#[test]
fn validate_fails_without_rating_toml() {
    let root = TempDir::new().expect("temp dir should be created");

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("validate")
        .arg(root.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_rejects_weights_that_do_not_sum_to_one() {
    let root = TempDir::new().expect("temp dir should be created");
    write(
        root.path(),
        "custom.toml",
        r#"
[[stats]]
key = "gol"
direction = "higher"
reference_best = 30.0

[profiles.attacker]
gol = 0.4
"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("validate")
        .arg(root.path())
        .arg("--config")
        .arg(root.path().join("custom.toml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weights"))
        .stderr(predicate::str::contains("profiles.attacker"));
}

#[test]
fn score_prints_json_report_for_all_players() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());
    let players = write(
        root.path(),
        "players.json",
        r#"[
  {"id": "p1", "name": "Delantero", "profile": "attacker",
   "stats": {"gol": 15, "pases_clave": 4, "perdidas": 2}},
  {"id": "p2", "name": "Volante", "profile": "midfielder",
   "stats": {"gol": 30, "pases_clave": 4, "perdidas": 2}}
]"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(&players)
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        // p1: 50 * 0.6 + 100 * 0.2 + 100 * 0.2
        .stdout(predicate::str::contains("\"overall\": 70.0"))
        .stdout(predicate::str::contains("\"failures\": []"));
}

#[test]
fn score_exits_with_warning_when_some_players_fail() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());
    let players = write(
        root.path(),
        "players.json",
        r#"[
  {"id": "ok", "profile": "attacker", "stats": {"gol": 30, "pases_clave": 4, "perdidas": 2}},
  {"id": "zero", "profile": "attacker", "stats": {"gol": 30, "pases_clave": 4, "perdidas": 0}},
  {"id": "gk", "profile": "goalkeeper", "stats": {"gol": 0, "pases_clave": 1, "perdidas": 3}}
]"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(&players)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Rating Report"))
        .stdout(predicate::str::contains("zero: division by zero"))
        .stdout(predicate::str::contains(
            "gk: no weights configured for profile: goalkeeper",
        ));
}

#[test]
fn score_exits_blocking_when_no_player_can_be_scored() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());
    let players = write(
        root.path(),
        "players.json",
        r#"[{"id": "p1", "profile": "attacker", "stats": {"gol": 10}}]"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(&players)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("missing statistic"));
}

#[test]
fn score_clamp_flag_caps_sub_scores() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());
    let players = write(
        root.path(),
        "players.json",
        r#"[{"id": "p1", "profile": "midfielder",
             "stats": {"gol": 60, "pases_clave": 4, "perdidas": 2}}]"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(&players)
        .arg("--clamp")
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"clamp_sub_scores\": true"))
        .stdout(predicate::str::contains("\"overall\": 100.0"));
}

#[test]
fn score_profile_flag_overrides_player_profiles() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());
    let players = write(
        root.path(),
        "players.json",
        r#"[{"id": "p1", "profile": "goalkeeper",
             "stats": {"gol": 15, "pases_clave": 4, "perdidas": 2}}]"#,
    );

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(&players)
        .arg("--profile")
        .arg("attacker")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("p1 (attacker): overall 70.0"));
}

#[test]
fn score_missing_players_file_is_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    write_config(root.path());

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("score")
        .arg(root.path())
        .arg("--players")
        .arg(root.path().join("missing.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn rank_lists_top_cards_by_attribute() {
    let root = TempDir::new().expect("temp dir should be created");
    let cards = write(root.path(), "cards.json", CARDS);

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("rank")
        .arg("--cards")
        .arg(&cards)
        .arg("--by")
        .arg("def")
        .arg("--limit")
        .arg("1")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Ranking: Defensa (def) - Top 1"))
        .stdout(predicate::str::contains("| 1 | Javier Mascherano |"))
        .stdout(predicate::str::contains("Lionel Messi").not());
}

#[test]
fn rank_applies_club_filter_and_json_output() {
    let root = TempDir::new().expect("temp dir should be created");
    let cards = write(root.path(), "cards.json", CARDS);

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("rank")
        .arg("--cards")
        .arg(&cards)
        .arg("--club")
        .arg("Boca")
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Juan Roman Riquelme"))
        .stdout(predicate::str::contains("Lionel Messi").not());
}

#[test]
fn list_searches_by_name_with_recent_sort() {
    let root = TempDir::new().expect("temp dir should be created");
    let cards = write(root.path(), "cards.json", CARDS);

    let mut cmd = Command::cargo_bin("cardrating").expect("binary should compile");
    cmd.arg("list")
        .arg("--cards")
        .arg(&cards)
        .arg("--name")
        .arg("JAVIER")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Javier Mascherano"))
        .stdout(predicate::str::contains("Riquelme").not());
}
