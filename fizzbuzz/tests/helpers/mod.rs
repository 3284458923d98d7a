//! Helpers to run the `fizzbuzz` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    pub(crate) fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Runs the binary with the given arguments. The `name` is used to give every run its own output
/// files, so tests can run in parallel.
pub(crate) fn run_fizzbuzz<'a>(name: &str, args: impl IntoIterator<Item = &'a str>) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(30);

    let binary = PathBuf::from(env!("CARGO_BIN_EXE_fizzbuzz"));
    let output_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let stdout_path = output_dir.join(format!("{name}.log"));
    let stderr_path = output_dir.join(format!("{name}.err"));

    let mut child = Command::new(binary)
        .args(args)
        .stdout(File::create(&stdout_path).expect("Failed to create log file."))
        .stderr(File::create(&stderr_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run fizzbuzz.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("fizzbuzz took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error waiting for fizzbuzz: {e}"),
    };

    let stdout = std::fs::read_to_string(&stdout_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&stderr_path).expect("Failed to read error file.");

    std::fs::remove_file(stdout_path).expect("Failed to remove log file.");
    std::fs::remove_file(stderr_path).expect("Failed to remove error file.");

    Run {
        status,
        stdout,
        stderr,
    }
}
