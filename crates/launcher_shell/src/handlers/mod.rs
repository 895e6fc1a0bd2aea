//! Command handlers. Each receives its arguments and the execution context and reports failure
//! as a [`ShellError`] whose message is written to the output log by the dispatcher.

mod media;
mod network;
mod shortcuts;
mod system;
mod web;

use launcher_contract::{CommandKind, ShellError, SpecialCommand};

use crate::context::ExecutionContext;

pub use network::{well_known_service, PortScanRequest};

pub(crate) use network::run_network;
pub(crate) use system::system_control;

pub(crate) fn run_command(
    kind: CommandKind,
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    match kind {
        CommandKind::Open => shortcuts::open_program(arguments, ctx),
        CommandKind::Folder => shortcuts::open_folder(arguments, ctx),
        CommandKind::Website => shortcuts::open_website(arguments, ctx),
        CommandKind::Run => system::run_shell_command(arguments, ctx),
        CommandKind::Search => web::search(arguments, ctx),
        CommandKind::Ping => system::ping(arguments, ctx),
        CommandKind::Theme => shortcuts::change_theme(arguments, ctx),
        CommandKind::AddShortcut => shortcuts::add_shortcut(arguments, ctx),
        CommandKind::Weather => web::weather(arguments, ctx),
        CommandKind::Spotify => media::spotify(arguments, ctx),
        CommandKind::News => web::news(arguments, ctx),
        CommandKind::Email => web::email(arguments, ctx),
    }
}

/// Runs a zero-argument special. `exit` is handled by the dispatcher and writes nothing.
pub(crate) fn run_special(
    command: SpecialCommand,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    match command {
        SpecialCommand::Exit => Ok(()),
        SpecialCommand::Help => shortcuts::display_shortcuts(ctx),
        SpecialCommand::SysInfo => system::system_info(ctx),
        SpecialCommand::History => system::show_history(ctx),
        SpecialCommand::Date => system::show_datetime(ctx),
        SpecialCommand::ShowThemes => shortcuts::show_themes(ctx),
    }
}
