//! Integration tests for the non-interactive CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn termfolio() -> Command {
    Command::cargo_bin("termfolio").expect("binary builds")
}

#[test]
fn test_list_projects_all() {
    termfolio()
        .arg("--list-projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("15 records found"))
        .stdout(predicate::str::contains("webserv"))
        .stdout(predicate::str::contains("django-blog"));
}

#[test]
fn test_list_projects_filtered() {
    termfolio()
        .args(["--list-projects", "--filter", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records found"))
        .stdout(predicate::str::contains("django-blog"))
        .stdout(predicate::str::contains("webserv").not());
}

#[test]
fn test_unknown_filter_is_an_error() {
    termfolio()
        .args(["--list-projects", "--filter", "cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}
