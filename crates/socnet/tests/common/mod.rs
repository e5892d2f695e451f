//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// The sample network used throughout the docs:
/// alice - bob - carol, and alice - dave.
pub const SAMPLE_NETWORK: &str = "alice bob\nbob carol\nalice dave\n";

/// Path to the socnet binary built by cargo for this test run
pub fn get_socnet_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_socnet"))
}

/// Run the socnet binary with colors disabled
pub fn run_socnet(args: &[&str]) -> Output {
    run_socnet_with_stdin(args, None)
}

/// Run the socnet binary, optionally feeding `stdin`
pub fn run_socnet_with_stdin(args: &[&str], stdin: Option<&str>) -> Output {
    run_socnet_in(None, args, stdin)
}

/// Run the socnet binary from `dir` (or the test's own directory)
pub fn run_socnet_in(dir: Option<&Path>, args: &[&str], stdin: Option<&str>) -> Output {
    use std::process::Stdio;

    let mut command = Command::new(get_socnet_binary());
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let mut child = command
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute socnet binary");

    {
        let mut pipe = child.stdin.take().expect("stdin was piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())
                .expect("Failed to write to socnet stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for socnet")
}

/// Write `contents` to a fresh temporary file
pub fn network_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write network file");
    file
}

/// Convert a path to `&str` for use as a CLI argument
pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
