//! External command invocation seam.
//!
//! Every operation in this tool is another program (`nmcli`, `rofi`),
//! so process invocation sits behind a trait: the real implementation
//! wraps [`std::process::Command`], tests substitute a recording mock.
//! All invocations block until the child exits; a hung tool hangs the
//! run.

use std::io;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs external commands, optionally feeding them stdin.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing its output.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Output>;

    /// Run `program` with `args`, writing `input` to its stdin before
    /// collecting output.
    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> io::Result<Output>;
}

/// [`CommandRunner`] backed by real processes.
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Output> {
        Command::new(program).args(args).output()
    }

    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> io::Result<Output> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        // Dropping the handle closes the pipe so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }

        child.wait_with_output()
    }
}

/// Check whether `command` resolves on PATH.
pub fn is_command_installed(command: &str) -> bool {
    Command::new("which")
        .arg(command)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
