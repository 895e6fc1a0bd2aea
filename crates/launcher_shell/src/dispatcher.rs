//! Routes one input line to its handler and contains every failure at that boundary.

use launcher_contract::{DispatchOutcome, ParsedLine, SpecialCommand};

use crate::context::ExecutionContext;
use crate::handlers;
use crate::parse::parse_line;

/// Parses and runs `raw`, writing all output (including errors) through `ctx`.
///
/// Nothing propagates past this call: parse and handler failures become one error line.
pub fn dispatch(raw: &str, ctx: &mut ExecutionContext<'_>) -> DispatchOutcome {
    let parsed = match parse_line(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            ctx.report(&err);
            return DispatchOutcome::Continue;
        }
    };

    let result = match &parsed {
        ParsedLine::Empty => return DispatchOutcome::Continue,
        ParsedLine::Special {
            command: SpecialCommand::Exit,
        } => {
            tracing::debug!("exit requested");
            return DispatchOutcome::Exit;
        }
        ParsedLine::Special { command } => {
            tracing::debug!(?command, "dispatching special");
            handlers::run_special(*command, ctx)
        }
        ParsedLine::System { action } => {
            tracing::debug!(?action, "dispatching system action");
            handlers::system_control(*action, ctx)
        }
        ParsedLine::Network { command, raw } => {
            tracing::debug!(?command, "dispatching network diagnostic");
            handlers::run_network(*command, raw, ctx)
        }
        ParsedLine::Command(command) => {
            tracing::debug!(
                command = command.kind.word(),
                arguments = command.arguments.len(),
                "dispatching command"
            );
            handlers::run_command(command.kind, &command.arguments, ctx)
        }
    };

    if let Err(err) = result {
        ctx.report(&err);
    }
    DispatchOutcome::Continue
}
