//! Shared helpers for plextrac-cli integration tests.
//!
//! Invariants:
//! - Commands built here never read a local `.env` file and never see
//!   `PLEXTRAC_*` values leaked from the host environment.

use assert_cmd::Command;

/// Returns a hermetic `plextrac-cli` command for integration testing.
pub fn plextrac_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("plextrac-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("PLEXTRAC_INSTANCE_URL")
        .env_remove("PLEXTRAC_CF_TOKEN")
        .env_remove("PLEXTRAC_USERNAME")
        .env_remove("PLEXTRAC_PASSWORD")
        .env_remove("PLEXTRAC_CLIENT_NAME")
        .env_remove("PLEXTRAC_SKIP_VERIFY")
        .env_remove("PLEXTRAC_TIMEOUT");

    cmd
}
