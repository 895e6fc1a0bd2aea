//! Shared launcher contracts used by the shortcut store, dispatcher, completion engine, and
//! terminal front end.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable shortcut metadata, parsed
//! command shapes, output lines, and the error taxonomy without depending on process spawning,
//! filesystem access, or any UI toolkit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four persisted shortcut categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortcutCategory {
    /// Alias to a shell command line.
    Programs,
    /// Alias to a filesystem directory.
    Folders,
    /// Alias to a URL.
    Websites,
    /// Alias to a color pair.
    Themes,
}

impl ShortcutCategory {
    /// Command words accepted by `addshortcut`, in display order.
    pub const ADDABLE_WORDS: [&'static str; 3] = ["website", "folder", "open"];

    /// Resolves the command word used by `addshortcut <type>`.
    ///
    /// Only the three path-bearing categories have a command word; themes are read-only.
    pub fn from_command_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "open" => Some(Self::Programs),
            "folder" => Some(Self::Folders),
            "website" => Some(Self::Websites),
            _ => None,
        }
    }

    /// Returns the command word that opens an alias of this category.
    pub fn command_word(self) -> &'static str {
        match self {
            Self::Programs => "open",
            Self::Folders => "folder",
            Self::Websites => "website",
            Self::Themes => "theme",
        }
    }

    /// Returns whether aliases in this category map to plain string targets.
    pub fn is_path_bearing(self) -> bool {
        !matches!(self, Self::Themes)
    }

    /// Singular human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Programs => "program",
            Self::Folders => "folder",
            Self::Websites => "website",
            Self::Themes => "theme",
        }
    }
}

impl fmt::Display for ShortcutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Color pair stored for a theme alias.
///
/// Persisted with the short `bg`/`fg` field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Background color, usually a `#rrggbb` string.
    #[serde(rename = "bg")]
    pub background_color: String,
    /// Foreground color, usually a `#rrggbb` string.
    #[serde(rename = "fg")]
    pub foreground_color: String,
}

impl ThemeColors {
    /// Creates a color pair.
    pub fn new(background_color: impl Into<String>, foreground_color: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            foreground_color: foreground_color.into(),
        }
    }
}

/// Zero-argument commands matched before any other parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialCommand {
    /// Ends the session.
    Exit,
    /// Lists program, folder, and website shortcuts.
    Help,
    /// Prints host platform details.
    SysInfo,
    /// Prints the command history.
    History,
    /// Prints the current local date and time.
    Date,
    /// Lists configured themes.
    ShowThemes,
}

impl SpecialCommand {
    /// Matches a whole trimmed input line, ignoring case.
    pub fn from_line(line: &str) -> Option<Self> {
        match line.to_ascii_lowercase().as_str() {
            "exit" => Some(Self::Exit),
            "help" => Some(Self::Help),
            "sysinfo" => Some(Self::SysInfo),
            "history" => Some(Self::History),
            "date" => Some(Self::Date),
            "showthemes" => Some(Self::ShowThemes),
            _ => None,
        }
    }
}

/// Power-state commands matched right after the special commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemAction {
    /// Power off the machine.
    Shutdown,
    /// Reboot the machine.
    Restart,
    /// Suspend the machine.
    Sleep,
}

impl SystemAction {
    /// Matches a whole trimmed input line, ignoring case.
    pub fn from_line(line: &str) -> Option<Self> {
        match line.to_ascii_lowercase().as_str() {
            "shutdown" => Some(Self::Shutdown),
            "restart" => Some(Self::Restart),
            "sleep" => Some(Self::Sleep),
            _ => None,
        }
    }

    /// Status line reported once the action was handed to the host.
    pub fn status_message(self) -> &'static str {
        match self {
            Self::Shutdown => "Shutting down...",
            Self::Restart => "Restarting...",
            Self::Sleep => "Entering sleep mode...",
        }
    }
}

/// Network diagnostics that consume the raw remainder of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkCommandKind {
    /// Hop-by-hop route trace.
    Traceroute,
    /// TCP connect scan over a port range.
    Portscan,
}

impl NetworkCommandKind {
    /// Matches the first word of a line, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "traceroute" => Some(Self::Traceroute),
            "portscan" => Some(Self::Portscan),
            _ => None,
        }
    }
}

/// Command words routed through the general two-part parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// `open <alias>`: run a program shortcut.
    Open,
    /// `folder <alias>`: open a folder shortcut.
    Folder,
    /// `website <alias>`: open a website shortcut.
    Website,
    /// `run <command...>`: run a raw shell command.
    Run,
    /// `search <terms...>`: open a web search.
    Search,
    /// `ping <host>`: ping a host.
    Ping,
    /// `theme <name>`: switch the UI theme.
    Theme,
    /// `addshortcut <type> <alias> <target>`: persist a new alias.
    AddShortcut,
    /// `weather <city...>`: current weather report.
    Weather,
    /// `spotify <subcommand...>`: media playback control.
    Spotify,
    /// `news <subcommand...>`: news headlines.
    News,
    /// `email <recipient> <subject...>`: compose a message.
    Email,
}

impl CommandKind {
    /// Every dispatchable command kind in help order.
    pub const ALL: [CommandKind; 12] = [
        CommandKind::Open,
        CommandKind::Folder,
        CommandKind::Website,
        CommandKind::Run,
        CommandKind::Search,
        CommandKind::Ping,
        CommandKind::Theme,
        CommandKind::AddShortcut,
        CommandKind::Weather,
        CommandKind::Spotify,
        CommandKind::News,
        CommandKind::Email,
    ];

    /// Looks up a command word. Callers lower-case the word first.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.word() == word)
    }

    /// Canonical lower-case command word.
    pub fn word(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Folder => "folder",
            Self::Website => "website",
            Self::Run => "run",
            Self::Search => "search",
            Self::Ping => "ping",
            Self::Theme => "theme",
            Self::AddShortcut => "addshortcut",
            Self::Weather => "weather",
            Self::Spotify => "spotify",
            Self::News => "news",
            Self::Email => "email",
        }
    }
}

/// Transient parse result for one general command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Resolved command kind.
    pub kind: CommandKind,
    /// Lower-cased command word as typed.
    pub command_word: String,
    /// Space-split arguments, in order.
    pub arguments: Vec<String>,
}

/// Classified input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParsedLine {
    /// Blank input.
    Empty,
    /// A zero-argument special command.
    Special {
        /// Matched command.
        command: SpecialCommand,
    },
    /// A power-state command.
    System {
        /// Matched action.
        action: SystemAction,
    },
    /// A network diagnostic with its unsplit remainder.
    Network {
        /// Matched diagnostic.
        command: NetworkCommandKind,
        /// Text after the command word, trimmed.
        raw: String,
    },
    /// A general handler command.
    Command(ParsedCommand),
}

/// Severity of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLevel {
    /// Regular output.
    Info,
    /// Failure report.
    Error,
}

/// One entry appended to the output log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Severity.
    pub level: OutputLevel,
    /// Text payload, possibly multi-line.
    pub text: String,
}

/// What the caller should do after a line was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchOutcome {
    /// Keep accepting input.
    Continue,
    /// The user asked to end the session.
    Exit,
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// Malformed command line or unknown command word.
    Parse,
    /// Handler-level argument misuse.
    Usage,
    /// Alias not found in its category.
    Lookup,
    /// Missing or malformed persisted configuration.
    Config,
    /// Underlying process, filesystem, or network call failed.
    Execution,
}

/// Error emitted by parsing, lookup, or handlers.
///
/// The message is the exact text written to the output log.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ShellErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Parse, message)
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Usage, message)
    }

    /// Creates a lookup error.
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Lookup, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Config, message)
    }

    /// Creates an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Execution, message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_words_round_trip_through_kind() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_word(kind.word()), Some(kind));
        }
        assert_eq!(CommandKind::from_word("OPEN"), None);
        assert_eq!(CommandKind::from_word("traceroute"), None);
    }

    #[test]
    fn special_and_system_words_ignore_case() {
        assert_eq!(SpecialCommand::from_line("HeLp"), Some(SpecialCommand::Help));
        assert_eq!(
            SpecialCommand::from_line("showthemes"),
            Some(SpecialCommand::ShowThemes)
        );
        assert_eq!(SpecialCommand::from_line("help me"), None);
        assert_eq!(SystemAction::from_line("SLEEP"), Some(SystemAction::Sleep));
    }

    #[test]
    fn only_path_bearing_categories_have_add_words() {
        assert_eq!(
            ShortcutCategory::from_command_word("Open"),
            Some(ShortcutCategory::Programs)
        );
        assert_eq!(ShortcutCategory::from_command_word("theme"), None);
        for word in ShortcutCategory::ADDABLE_WORDS {
            let category = ShortcutCategory::from_command_word(word).expect("addable word");
            assert!(category.is_path_bearing());
            assert_eq!(category.command_word(), word);
        }
    }

    #[test]
    fn theme_colors_use_short_field_names() {
        let colors: ThemeColors =
            serde_json::from_str(r##"{"bg":"#000000","fg":"#00ff00"}"##).expect("parse theme");
        assert_eq!(colors, ThemeColors::new("#000000", "#00ff00"));
    }

    #[test]
    fn shell_error_displays_its_message() {
        let err = ShellError::lookup("Error: Website shortcut 'x' not found.");
        assert_eq!(err.to_string(), "Error: Website shortcut 'x' not found.");
        assert_eq!(err.code, ShellErrorCode::Lookup);
    }
}
