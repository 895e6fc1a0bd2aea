//! Bounded event queue between input threads and the UI thread.
//!
//! Producer threads (line reader, hotkey listener) only send [`UiEvent`]s. The UI thread alone
//! drains the queue and touches the shell, so output, history, and the shortcut store have a
//! single writer.

use std::io::{self, BufRead};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use launcher_contract::{DispatchOutcome, OutputLevel, OutputLine};

use crate::context::OutputSink;
use crate::shell::{LineCompletion, Shell};

/// Window actions bound to global hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Switch between compact and expanded size.
    ToggleSize,
    /// Show or hide the window.
    ToggleVisibility,
    /// Focus the input line.
    FocusInput,
}

/// Work scheduled onto the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A line was submitted.
    Submit(String),
    /// Completion was requested for a partial line.
    Complete(String),
    /// A global hotkey fired.
    Hotkey(HotkeyAction),
    /// Input ended; stop the loop.
    Shutdown,
}

/// Creates the bounded UI queue. A zero capacity is raised to one.
pub fn ui_channel(capacity: usize) -> (SyncSender<UiEvent>, Receiver<UiEvent>) {
    sync_channel(capacity.max(1))
}

/// Blocking source of global hotkey presses.
pub trait HotkeySource: Send + 'static {
    /// Waits for the next hotkey. `None` ends the listener.
    fn next_action(&mut self) -> Option<HotkeyAction>;
}

/// Runs `source` on a named thread, forwarding each hotkey to the UI queue.
///
/// The thread exits when the source ends or the UI side hangs up.
///
/// # Errors
///
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn_hotkey_listener<S: HotkeySource>(
    mut source: S,
    events: SyncSender<UiEvent>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("launcher-hotkeys".to_string())
        .spawn(move || {
            while let Some(action) = source.next_action() {
                if events.send(UiEvent::Hotkey(action)).is_err() {
                    break;
                }
            }
            tracing::debug!("hotkey listener stopped");
        })
}

/// Reads lines from `reader` on a named thread and submits each one to the UI queue.
///
/// A line ending in a tab is a completion request for the text before the tab. Sends
/// [`UiEvent::Shutdown`] at end of input.
///
/// # Errors
///
/// Returns the OS error if the thread cannot be spawned.
pub fn spawn_line_reader<R>(reader: R, events: SyncSender<UiEvent>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("launcher-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        tracing::warn!("input read failed: {err}");
                        break;
                    }
                };
                let event = match line.strip_suffix('\t') {
                    Some(partial) => UiEvent::Complete(partial.to_string()),
                    None => UiEvent::Submit(line),
                };
                if events.send(event).is_err() {
                    return;
                }
            }
            let _ = events.send(UiEvent::Shutdown);
        })
}

fn write_completion(completion: &LineCompletion, output: &mut dyn OutputSink) {
    let text = match (&completion.completed, completion.suggestions.as_slice()) {
        (Some(completed), _) => completed.clone(),
        (None, []) => "No completions.".to_string(),
        (None, suggestions) => suggestions.join("  "),
    };
    output.write_line(OutputLine {
        level: OutputLevel::Info,
        text,
    });
}

/// Drains `events` on the calling thread until exit, shutdown, or every sender hangs up.
///
/// `after_event` runs after each handled event, e.g. to redraw a prompt.
pub fn run_event_loop(
    shell: &mut Shell,
    events: &Receiver<UiEvent>,
    output: &mut dyn OutputSink,
    mut after_event: impl FnMut(&Shell),
) -> DispatchOutcome {
    for event in events.iter() {
        match event {
            UiEvent::Submit(line) => {
                if shell.submit(&line, output) == DispatchOutcome::Exit {
                    return DispatchOutcome::Exit;
                }
            }
            UiEvent::Complete(input) => write_completion(&shell.complete_line(&input), output),
            UiEvent::Hotkey(action) => shell.handle_hotkey(action),
            UiEvent::Shutdown => break,
        }
        after_event(shell);
    }
    DispatchOutcome::Continue
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    use launcher_contract::ThemeColors;
    use launcher_shortcuts::{ShortcutPaths, ShortcutSet, ShortcutStore};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ShellConfig;
    use crate::context::OutputLog;
    use crate::services::{Services, UiActions};

    struct ScriptedHotkeys(Vec<HotkeyAction>);

    impl HotkeySource for ScriptedHotkeys {
        fn next_action(&mut self) -> Option<HotkeyAction> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingUi(Rc<RefCell<Vec<&'static str>>>);

    impl UiActions for RecordingUi {
        fn apply_theme(&self, _name: &str, _colors: &ThemeColors) -> Result<(), String> {
            Ok(())
        }

        fn toggle_size(&self) {
            self.0.borrow_mut().push("size");
        }

        fn toggle_visibility(&self) {
            self.0.borrow_mut().push("visibility");
        }

        fn focus_input(&self) {
            self.0.borrow_mut().push("focus");
        }
    }

    fn shell_with_ui(ui: RecordingUi) -> Shell {
        let dir = std::env::temp_dir().join("launcher-event-loop-unused");
        let store = ShortcutStore::with_set(ShortcutPaths::in_dir(dir), ShortcutSet::default());
        Shell::from_parts(
            ShellConfig::default(),
            Services::default().with_ui(ui),
            store,
            Default::default(),
        )
    }

    #[test]
    fn hotkeys_are_forwarded_in_order() {
        let (tx, rx) = ui_channel(1);
        let handle = spawn_hotkey_listener(
            ScriptedHotkeys(vec![HotkeyAction::FocusInput, HotkeyAction::ToggleSize]),
            tx,
        )
        .expect("spawn listener");

        assert_eq!(rx.recv(), Ok(UiEvent::Hotkey(HotkeyAction::FocusInput)));
        assert_eq!(rx.recv(), Ok(UiEvent::Hotkey(HotkeyAction::ToggleSize)));
        handle.join().expect("listener thread");
        assert!(rx.recv().is_err());
    }

    #[test]
    fn loop_submits_lines_and_stops_at_exit() {
        let ui = RecordingUi::default();
        let mut shell = shell_with_ui(ui.clone());
        let (tx, rx) = ui_channel(4);
        tx.send(UiEvent::Hotkey(HotkeyAction::ToggleVisibility))
            .expect("queue hotkey");
        let reader = spawn_line_reader(Cursor::new("history\nexit\ndate\n"), tx)
            .expect("spawn reader");

        let mut log = OutputLog::default();
        let mut ticks = 0;
        let outcome = run_event_loop(&mut shell, &rx, &mut log, |_| ticks += 1);

        assert_eq!(outcome, DispatchOutcome::Exit);
        assert_eq!(shell.history(), ["history", "exit"]);
        assert_eq!(log.text(), "Command History:\nhistory");
        assert!(ticks >= 1);
        drop(rx);
        reader.join().expect("reader thread");
        assert_eq!(*ui.0.borrow(), vec!["visibility"]);
    }

    #[test]
    fn trailing_tab_requests_completion() {
        let tree = launcher_completion::CommandTree::new()
            .with("spotify", launcher_completion::CommandTree::new().with_leaf("play"))
            .with_leaf("search")
            .with_leaf("sysinfo");
        let store = ShortcutStore::with_set(
            ShortcutPaths::in_dir(std::env::temp_dir().join("launcher-event-loop-unused")),
            ShortcutSet::default(),
        );
        let mut shell = Shell::from_parts(ShellConfig::default(), Services::default(), store, tree);
        let (tx, rx) = ui_channel(8);
        let reader = spawn_line_reader(Cursor::new("spo\t\ns\t\nzz\t\n"), tx)
            .expect("spawn reader");

        let mut log = OutputLog::default();
        run_event_loop(&mut shell, &rx, &mut log, |_| {});
        reader.join().expect("reader thread");

        assert_eq!(log.text(), "spotify \nspotify  search  sysinfo\nNo completions.");
        assert!(shell.history().is_empty());
    }

    #[test]
    fn loop_ends_on_shutdown_event() {
        let mut shell = shell_with_ui(RecordingUi::default());
        let (tx, rx) = ui_channel(4);
        tx.send(UiEvent::Hotkey(HotkeyAction::ToggleSize))
            .expect("queue hotkey");
        tx.send(UiEvent::Shutdown).expect("queue shutdown");
        tx.send(UiEvent::Submit("date".to_string()))
            .expect("queue submit");

        let mut log = OutputLog::default();
        let outcome = run_event_loop(&mut shell, &rx, &mut log, |_| {});
        assert_eq!(outcome, DispatchOutcome::Continue);
        assert!(log.lines().is_empty());
    }
}
