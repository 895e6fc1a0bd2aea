//! Per-dispatch execution context and the output log.

use launcher_contract::{OutputLevel, OutputLine, ShellError};
use launcher_shortcuts::ShortcutStore;

use crate::config::ShellConfig;
use crate::services::Services;

/// Destination for the lines a command produces.
pub trait OutputSink {
    /// Appends one line.
    fn write_line(&mut self, line: OutputLine);
}

impl<F> OutputSink for F
where
    F: FnMut(OutputLine),
{
    fn write_line(&mut self, line: OutputLine) {
        self(line)
    }
}

/// Append-only in-memory output log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    lines: Vec<OutputLine>,
}

impl OutputLog {
    /// Every line written so far.
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Line texts joined with newlines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns whether any line was written at error level.
    pub fn has_errors(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.level == OutputLevel::Error)
    }
}

impl OutputSink for OutputLog {
    fn write_line(&mut self, line: OutputLine) {
        self.lines.push(line);
    }
}

/// Everything a handler may read or mutate while running one command.
pub struct ExecutionContext<'a> {
    /// Shortcut aliases and their backing files.
    pub store: &'a mut ShortcutStore,
    /// External collaborators.
    pub services: &'a Services,
    /// Runtime settings.
    pub config: &'a ShellConfig,
    /// Lines submitted so far, including the current one.
    pub history: &'a [String],
    output: &'a mut dyn OutputSink,
}

impl<'a> ExecutionContext<'a> {
    /// Bundles the pieces borrowed for one dispatch.
    pub fn new(
        store: &'a mut ShortcutStore,
        services: &'a Services,
        config: &'a ShellConfig,
        history: &'a [String],
        output: &'a mut dyn OutputSink,
    ) -> Self {
        Self {
            store,
            services,
            config,
            history,
            output,
        }
    }

    /// Writes a regular output line.
    pub fn info(&mut self, text: impl Into<String>) {
        self.output.write_line(OutputLine {
            level: OutputLevel::Info,
            text: text.into(),
        });
    }

    /// Writes an error line for `err`.
    pub fn report(&mut self, err: &ShellError) {
        tracing::debug!(code = ?err.code, "command failed: {}", err.message);
        self.output.write_line(OutputLine {
            level: OutputLevel::Error,
            text: err.message.clone(),
        });
    }
}
