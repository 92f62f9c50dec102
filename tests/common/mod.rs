//! Shared integration-test harness for running the `folio` binary as a
//! child process and capturing its output.

#![allow(dead_code)]

use std::process::{Command, Output};

/// Helpers for spawning the `folio` binary in integration tests.
pub struct FolioProcess;

impl FolioProcess {
    /// Runs `folio` with the given arguments and waits for it to exit.
    ///
    /// Ambient `FOLIO_*` variables are stripped so the environment the
    /// tests run under cannot change the binary's behavior.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_folio"))
            .args(args)
            .env_remove("FOLIO_LOG_LEVEL")
            .env_remove("FOLIO_HTTP_ADDR")
            .env_remove("FOLIO_COLOR")
            .output()
            .expect("failed to spawn folio")
    }
}
