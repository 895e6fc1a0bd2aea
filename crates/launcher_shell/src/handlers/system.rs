//! Host handlers: raw shell commands, ping, power state, and the informational specials.

use chrono::Local;
use launcher_contract::{ShellError, SystemAction};

use crate::context::ExecutionContext;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn run_shell_command(
    arguments: &[String],
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    let command_line = arguments.join(" ");
    let output = ctx
        .services
        .processes
        .run_shell(&command_line)
        .map_err(|err| ShellError::execution(format!("Error running command: {err}")))?;
    let text = output.text().trim_end();
    if !text.is_empty() {
        ctx.info(text);
    }
    Ok(())
}

pub(crate) fn ping(arguments: &[String], ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let host = arguments.first().map(|arg| arg.trim()).unwrap_or_default();
    if host.is_empty() || host.starts_with('-') {
        return Err(ShellError::usage("Usage: ping <hostname>"));
    }
    let count = ctx.config.ping_count.max(1).to_string();
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };
    let output = ctx
        .services
        .processes
        .run("ping", &[count_flag, count.as_str(), host])
        .map_err(|err| ShellError::execution(format!("Ping error: {err}")))?;
    ctx.info(output.text().trim_end());
    Ok(())
}

pub(crate) fn system_control(
    action: SystemAction,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    ctx.services
        .power
        .apply(action)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    ctx.info(action.status_message());
    Ok(())
}

pub(crate) fn system_info(ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let info = [
        ("OS", std::env::consts::OS),
        ("Family", std::env::consts::FAMILY),
        ("Architecture", std::env::consts::ARCH),
        ("Launcher Version", env!("CARGO_PKG_VERSION")),
    ];
    let text = info
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    ctx.info(text);
    Ok(())
}

pub(crate) fn show_history(ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let mut text = String::from("Command History:");
    for entry in ctx.history {
        text.push('\n');
        text.push_str(entry);
    }
    ctx.info(text);
    Ok(())
}

pub(crate) fn show_datetime(ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let now = Local::now().format(DATE_FORMAT);
    ctx.info(format!("The date-time right now is:\t{now}"));
    Ok(())
}
