// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process and filesystem probes.
//!
//! The only place phare touches the operating system. Checks go through
//! the [`Probe`] trait so tests can substitute a scripted environment.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Output of a single shell invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured stdout. Empty when the streams were inherited.
    pub stdout: String,
    /// Exit status of the command.
    pub status: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Read-only view of the environment plus command execution.
pub trait Probe {
    /// Run `command` through the shell and capture its stdout.
    fn capture(&self, command: &str) -> Result<CommandOutput>;

    /// Run `command` through the shell with inherited stdio.
    ///
    /// The tool's own output goes straight to the user's terminal.
    fn execute(&self, command: &str) -> Result<CommandOutput>;

    fn file_exists(&self, path: &Path) -> bool;

    fn dir_exists(&self, path: &Path) -> bool;
}

/// Build the shell command used to look up `binary` on the PATH.
///
/// `command -v` is a shell builtin, so this works where `which` is not
/// installed. Relative paths resolve against the working directory.
pub fn lookup_command(binary: &str) -> String {
    format!("command -v {}", binary)
}

/// Probe backed by `sh` and the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl SystemProbe {
    fn shell(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl Probe for SystemProbe {
    fn capture(&self, command: &str) -> Result<CommandOutput> {
        let output = Self::shell(command)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn { command: command.to_string(), source })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: exit_code(output.status),
        })
    }

    fn execute(&self, command: &str) -> Result<CommandOutput> {
        tracing::debug!("executing: {}", command);
        let status = Self::shell(command)
            .status()
            .map_err(|source| Error::Spawn { command: command.to_string(), source })?;

        Ok(CommandOutput { stdout: String::new(), status: exit_code(status) })
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Map a process exit status to an integer code.
///
/// A process killed by a signal has no code; report it the way shells do
/// (128 + signal) so it still reads as a failure.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
