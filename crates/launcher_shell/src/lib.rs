//! Launcher command shell: input parsing, dispatch to handlers, collaborator contracts, runtime
//! configuration, and the UI event queue.
//!
//! A [`Shell`] owns the shortcut store, the command tree, and the session history. Each submitted
//! line is parsed into a [`launcher_contract::ParsedLine`] and routed by [`dispatch`] to exactly
//! one handler, which runs synchronously against an [`ExecutionContext`]. Handler failures never
//! escape the dispatcher; they are written to the output sink as error lines.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod event_loop;
pub mod handlers;
pub mod parse;
pub mod services;
pub mod shell;

pub use config::{ConfigError, ConfigLoader, ShellConfig, DEFAULT_CONFIG_FILE};
pub use context::{ExecutionContext, OutputLog, OutputSink};
pub use dispatcher::dispatch;
pub use event_loop::{
    run_event_loop, spawn_hotkey_listener, spawn_line_reader, ui_channel, HotkeyAction,
    HotkeySource, UiEvent,
};
pub use parse::{parse_line, MISSING_ARGUMENTS};
pub use services::Services;
pub use shell::{load_command_tree, LineCompletion, Shell};
