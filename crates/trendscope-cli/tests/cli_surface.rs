use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_subcommands() {
    Command::cargo_bin("trendscope")
        .expect("binary builds")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("stats"))
                .and(predicate::str::contains("facets"))
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("refresh"))
                .and(predicate::str::contains("dash")),
        );
}

#[test]
fn malformed_time_bound_is_rejected_before_any_request() {
    Command::cargo_bin("trendscope")
        .expect("binary builds")
        .env_remove("TRENDSCOPE_API_BASE")
        .args(["list", "--since", "gibberish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --since"));
}

#[test]
fn unknown_sort_key_is_rejected_by_the_parser() {
    Command::cargo_bin("trendscope")
        .expect("binary builds")
        .args(["list", "--sort", "popularity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sort"));
}
