use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("skyfare"));
    cmd.env("SKYFARE_BASE_URL", "http://127.0.0.1:9");
    cmd
}

fn search(extra: &[&str]) -> Command {
    let mut c = cmd();
    c.args(["search", "-f", "Guarulhos", "-t", "Lisboa"]);
    c.args(extra);
    c
}

#[test]
fn top_level_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search flights through the Sky Scrapper API from the terminal",
        ))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("airports"))
        .stdout(predicate::str::contains("mcp"))
        .stdout(predicate::str::contains("RAPIDAPI_KEY"));
}

#[test]
fn top_level_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skyfare 0.3.0"));
}

#[test]
fn search_help_shows_options() {
    cmd()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-f, --from <TEXT>"))
        .stdout(predicate::str::contains("-t, --to <TEXT>"))
        .stdout(predicate::str::contains("-d, --date <YYYY-MM-DD>"))
        .stdout(predicate::str::contains("--return-date"))
        .stdout(predicate::str::contains("--trip <TYPE>"))
        .stdout(predicate::str::contains("--cabin <CLASS>"))
        .stdout(predicate::str::contains("--adults <N>"))
        .stdout(predicate::str::contains("--currency <CODE>"))
        .stdout(predicate::str::contains("--timeout <SECS>"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("[default: economy]"))
        .stdout(predicate::str::contains("Round-trip:"));
}

#[test]
fn missing_from_fails() {
    cmd()
        .args(["search", "-t", "Lisboa", "-d", "2099-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from <TEXT>"));
}

#[test]
fn invalid_date_format() {
    search(&["-d", "01-03-2099"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn past_departure_date() {
    search(&["-d", "2020-01-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("before the earliest selectable day"));
}

#[test]
fn return_before_departure() {
    search(&["-d", "2099-03-10", "--return-date", "2099-03-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is before departure date"));
}

#[test]
fn return_date_on_one_way() {
    search(&["-d", "2099-03-01", "--return-date", "2099-03-08", "--trip", "one-way"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("one-way trips cannot have a return date"));
}

#[test]
fn invalid_cabin_class() {
    search(&["-d", "2099-03-01", "--cabin", "luxury"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid cabin class"));
}

#[test]
fn invalid_trip_type() {
    search(&["-d", "2099-03-01", "--trip", "zigzag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid trip type"));
}

#[test]
fn too_many_adults() {
    search(&["-d", "2099-03-01", "--adults", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("between 1 and 9"));
}

#[test]
fn json_errors_go_to_stdout() {
    search(&["-d", "2099-03-01", "--cabin", "luxury", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""kind":"validation_error""#))
        .stdout(predicate::str::contains("invalid cabin class"));
}

#[test]
fn zero_timeout_is_rejected() {
    search(&["-d", "2099-03-01", "--timeout", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--timeout"));
}
