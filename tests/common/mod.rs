//! Shared integration-test helpers for running the mockdown binary as a
//! child process.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Runs the mockdown binary with the given arguments and empty stdin.
pub fn run(args: &[&str]) -> Output {
    run_with_stdin(args, "")
}

/// Runs the mockdown binary, feeding `input` on stdin.
///
/// Panics on spawn or I/O failure; assertion of the exit status is left to
/// the caller.
pub fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_mockdown");
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn mockdown");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for mockdown")
}

/// Writes a wireframe file into `dir` and returns its path.
pub fn write_mock(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write mock file");
    path
}
