//! Desktop integration collaborators: URL/folder opening, power state, and UI actions.

use std::path::Path;
use std::process::Command;

use launcher_contract::{SystemAction, ThemeColors};

/// Host service for handing URLs and folders to the desktop environment.
pub trait DesktopOpener {
    /// Opens a URL in the default browser.
    fn open_url(&self, url: &str) -> Result<(), String>;

    /// Opens a directory in the file manager.
    fn open_folder(&self, path: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Opener backed by the default browser and the platform file manager.
pub struct SystemDesktopOpener;

impl DesktopOpener for SystemDesktopOpener {
    fn open_url(&self, url: &str) -> Result<(), String> {
        tracing::debug!(url, "opening in default browser");
        webbrowser::open(url).map_err(|err| format!("failed to open '{url}': {err}"))
    }

    fn open_folder(&self, path: &str) -> Result<(), String> {
        if !Path::new(path).is_dir() {
            return Err(format!("folder '{path}' does not exist"));
        }
        tracing::debug!(path, "opening in file manager");
        open::that_detached(path).map_err(|err| format!("failed to open '{path}': {err}"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op opener for headless hosts.
pub struct NoopDesktopOpener;

impl DesktopOpener for NoopDesktopOpener {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }

    fn open_folder(&self, _path: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Host service for shutdown, restart, and sleep.
pub trait PowerControl {
    /// Requests the power-state change.
    fn apply(&self, action: SystemAction) -> Result<(), String>;
}

/// Power control that runs the operating system's power commands when enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPowerControl {
    enabled: bool,
}

impl SystemPowerControl {
    /// Creates a power controller; a disabled controller refuses every action.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn command_for(action: SystemAction) -> Command {
        let (program, args): (&str, &[&str]) = if cfg!(windows) {
            match action {
                SystemAction::Shutdown => ("shutdown", &["/s", "/t", "0"]),
                SystemAction::Restart => ("shutdown", &["/r", "/t", "0"]),
                SystemAction::Sleep => ("rundll32.exe", &["powrprof.dll,SetSuspendState", "0,1,0"]),
            }
        } else if cfg!(target_os = "macos") {
            match action {
                SystemAction::Shutdown => ("shutdown", &["-h", "now"]),
                SystemAction::Restart => ("shutdown", &["-r", "now"]),
                SystemAction::Sleep => ("pmset", &["sleepnow"]),
            }
        } else {
            match action {
                SystemAction::Shutdown => ("systemctl", &["poweroff"]),
                SystemAction::Restart => ("systemctl", &["reboot"]),
                SystemAction::Sleep => ("systemctl", &["suspend"]),
            }
        };
        let mut command = Command::new(program);
        command.args(args);
        command
    }
}

impl PowerControl for SystemPowerControl {
    fn apply(&self, action: SystemAction) -> Result<(), String> {
        if !self.enabled {
            return Err(
                "power control is disabled; set allow_power_control = true in launcher.toml"
                    .to_string(),
            );
        }
        let mut command = Self::command_for(action);
        let program = command.get_program().to_string_lossy().into_owned();
        tracing::info!(?action, %program, "invoking power command");
        command
            .spawn()
            .map(|_| ())
            .map_err(|err| format!("{program}: {err}"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op power control that accepts every action without doing anything.
pub struct NoopPowerControl;

impl PowerControl for NoopPowerControl {
    fn apply(&self, _action: SystemAction) -> Result<(), String> {
        Ok(())
    }
}

/// Window-level actions the shell asks the front end to perform.
pub trait UiActions {
    /// Recolors the window with a theme.
    fn apply_theme(&self, name: &str, colors: &ThemeColors) -> Result<(), String>;

    /// Switches between the compact and expanded window size.
    fn toggle_size(&self) {}

    /// Shows or hides the window.
    fn toggle_visibility(&self) {}

    /// Moves keyboard focus to the input line.
    fn focus_input(&self) {}
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op UI actions for headless hosts.
pub struct NoopUiActions;

impl UiActions for NoopUiActions {
    fn apply_theme(&self, _name: &str, _colors: &ThemeColors) -> Result<(), String> {
        Ok(())
    }
}
