//! Terminal front end for the launcher shell.
//!
//! Reads one command per line from stdin (or from `--command`), prints output lines, and ends a line
//! with a tab to ask for completions instead of running it.

mod ui;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use launcher_contract::{DispatchOutcome, OutputLevel, OutputLine};
use launcher_shell::{
    run_event_loop, spawn_line_reader, ui_channel, Services, Shell, ShellConfig,
    DEFAULT_CONFIG_FILE,
};
use tracing_subscriber::EnvFilter;

use crate::ui::TerminalUi;

const LOG_ENV: &str = "LAUNCHER_LOG";
const PROMPT: &str = "> ";
const RESET_COLORS: &str = "\x1b[0m";

#[derive(Debug, Parser)]
#[command(name = "launcher", version, about = "Keyboard-driven command launcher")]
struct Args {
    /// Runtime settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding shortcut, theme, and command tree files. Overrides the settings file.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Run these lines in order and exit instead of reading stdin.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut config = match ShellConfig::load(args.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}; using default settings");
            ShellConfig::default()
        }
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let services = Services::system(&config).with_ui(TerminalUi);
    let mut shell = Shell::open(config, services);
    let themed = shell.restore_last_theme().is_some();

    let code = if args.commands.is_empty() {
        run_interactive(&mut shell)
    } else {
        run_batch(&mut shell, &args.commands)
    };

    if themed || shell.store().load_last_theme().is_some() {
        print!("{RESET_COLORS}");
        let _ = io::stdout().flush();
    }
    code
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_line(line: &OutputLine) {
    match line.level {
        OutputLevel::Info => println!("{}", line.text),
        OutputLevel::Error => eprintln!("{}", line.text),
    }
}

fn show_prompt() {
    print!("{PROMPT}");
    let _ = io::stdout().flush();
}

fn run_batch(shell: &mut Shell, commands: &[String]) -> ExitCode {
    let mut failed = false;
    let mut sink = |line: OutputLine| {
        failed |= line.level == OutputLevel::Error;
        print_line(&line);
    };
    for command in commands {
        if shell.submit(command, &mut sink) == DispatchOutcome::Exit {
            break;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_interactive(shell: &mut Shell) -> ExitCode {
    let (events, queue) = ui_channel(shell.config().event_queue_capacity);
    let reader = match spawn_line_reader(io::BufReader::new(io::stdin()), events) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("error: failed to start input reader: {err}");
            return ExitCode::FAILURE;
        }
    };

    show_prompt();
    let mut sink = |line: OutputLine| print_line(&line);
    let outcome = run_event_loop(shell, &queue, &mut sink, |_| show_prompt());
    tracing::debug!(?outcome, "event loop finished");

    // The reader stays blocked on stdin after `exit`; only join it once input has ended.
    if outcome == DispatchOutcome::Continue {
        let _ = reader.join();
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn repeated_command_flags_keep_order() {
        let args = Args::parse_from(["launcher", "-c", "date", "--command", "history"]);
        assert_eq!(args.commands, vec!["date", "history"]);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(args.data_dir, None);
    }
}
