//! Exit-code behavior of the paths that fail before any prompting starts.
//!
//! The interactive flows themselves are covered against wiremock in the
//! client crate and in the workflow unit tests; the binary tests here stick
//! to configuration failures, which are deterministic without a terminal.

mod common;

use common::plextrac_cmd;

#[test]
fn help_exits_cleanly() {
    plextrac_cmd().arg("--help").assert().code(0);
}

#[test]
fn version_exits_cleanly() {
    plextrac_cmd().arg("--version").assert().code(0);
}

#[test]
fn malformed_instance_url_is_a_general_error() {
    plextrac_cmd()
        .args(["--instance-url", "acme.plextrac.com"])
        .assert()
        .code(1);
}

#[test]
fn non_http_scheme_is_a_general_error() {
    plextrac_cmd()
        .args(["--instance-url", "ftp://acme.plextrac.com"])
        .assert()
        .code(1);
}

#[test]
fn zero_timeout_is_a_general_error() {
    plextrac_cmd()
        .args(["--instance-url", "https://acme.plextrac.com", "--timeout", "0"])
        .assert()
        .code(1);
}

#[test]
fn invalid_skip_verify_env_is_a_general_error() {
    plextrac_cmd()
        .env("PLEXTRAC_SKIP_VERIFY", "yes")
        .assert()
        .code(1);
}

#[test]
fn unparsable_flags_fail() {
    plextrac_cmd()
        .args(["--timeout", "soon"])
        .assert()
        .failure();
}
