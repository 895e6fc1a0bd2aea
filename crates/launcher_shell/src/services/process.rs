//! Process execution collaborator.

use std::process::{Command, Output};

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited successfully.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Standard output when it is non-empty, otherwise standard error.
    pub fn text(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

impl From<Output> for ProcessOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Host service that runs commands and captures their output.
pub trait ProcessRunner {
    /// Runs `command_line` through the platform shell.
    fn run_shell(&self, command_line: &str) -> Result<ProcessOutput, String>;

    /// Runs `program` directly with `args`.
    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Process runner backed by [`std::process::Command`].
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run_shell(&self, command_line: &str) -> Result<ProcessOutput, String> {
        let mut command = if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.args(["/C", command_line]);
            command
        } else {
            let mut command = Command::new("sh");
            command.args(["-c", command_line]);
            command
        };
        tracing::debug!(command_line, "running shell command");
        command
            .output()
            .map(ProcessOutput::from)
            .map_err(|err| err.to_string())
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput, String> {
        tracing::debug!(program, ?args, "running program");
        Command::new(program)
            .args(args)
            .output()
            .map(ProcessOutput::from)
            .map_err(|err| format!("{program}: {err}"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Process runner for hosts where spawning is not allowed.
pub struct NoopProcessRunner;

impl ProcessRunner for NoopProcessRunner {
    fn run_shell(&self, _command_line: &str) -> Result<ProcessOutput, String> {
        Err("process execution is unavailable on this host".to_string())
    }

    fn run(&self, _program: &str, _args: &[&str]) -> Result<ProcessOutput, String> {
        Err("process execution is unavailable on this host".to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_prefers_stdout_then_stderr() {
        let mut output = ProcessOutput {
            success: false,
            stdout: String::new(),
            stderr: "boom".to_string(),
        };
        assert_eq!(output.text(), "boom");
        output.stdout = "ok".to_string();
        assert_eq!(output.text(), "ok");
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_shell_output() {
        let output = SystemProcessRunner
            .run_shell("echo launcher")
            .expect("sh should run");
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "launcher");
    }

    #[test]
    fn noop_runner_refuses() {
        assert!(NoopProcessRunner.run_shell("echo hi").is_err());
    }
}
