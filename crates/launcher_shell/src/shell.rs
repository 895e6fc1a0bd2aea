//! Long-lived shell state owned by the UI thread.

use std::path::Path;

use launcher_completion::{
    action_for_key, reduce_completion, CommandTree, CompletionEffect, CompletionState, InputKey,
};
use launcher_contract::{DispatchOutcome, ShellError, ShortcutCategory};
use launcher_shortcuts::{load_json_or_default, ShortcutPaths, ShortcutStore};

use crate::config::ShellConfig;
use crate::context::{ExecutionContext, OutputSink};
use crate::dispatcher::dispatch;
use crate::event_loop::HotkeyAction;
use crate::services::Services;

/// Loads the autocomplete tree, degrading to an empty tree when the file is missing or malformed.
pub fn load_command_tree(path: &Path) -> CommandTree {
    load_json_or_default(path, "command tree")
}

/// Completion result for a front end without live key handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCompletion {
    /// Candidates for the last word, in tree order.
    pub suggestions: Vec<String>,
    /// The input with the only candidate accepted, when there was exactly one.
    pub completed: Option<String>,
}

/// Shortcut store, collaborators, history, and completion state for one session.
pub struct Shell {
    config: ShellConfig,
    services: Services,
    store: ShortcutStore,
    tree: CommandTree,
    history: Vec<String>,
    completion: CompletionState,
}

impl Shell {
    /// Loads shortcuts and the command tree from `config.data_dir`.
    pub fn open(config: ShellConfig, services: Services) -> Self {
        let store = ShortcutStore::open(ShortcutPaths::in_dir(&config.data_dir));
        let tree = load_command_tree(&store.paths().command_tree);
        Self::from_parts(config, services, store, tree)
    }

    /// Assembles a shell from already-loaded parts.
    pub fn from_parts(
        config: ShellConfig,
        services: Services,
        store: ShortcutStore,
        tree: CommandTree,
    ) -> Self {
        Self {
            config,
            services,
            store,
            tree,
            history: Vec::new(),
            completion: CompletionState::default(),
        }
    }

    /// Reapplies the persisted last theme, if it still exists. Returns the applied name.
    pub fn restore_last_theme(&self) -> Option<String> {
        let name = self.store.load_last_theme()?;
        let colors = self.store.shortcuts().theme(&name)?;
        match self.services.ui.apply_theme(&name, colors) {
            Ok(()) => Some(name),
            Err(err) => {
                tracing::warn!(theme = %name, "failed to restore theme: {err}");
                None
            }
        }
    }

    /// Records and dispatches one submitted line.
    pub fn submit(&mut self, line: &str, output: &mut dyn OutputSink) -> DispatchOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return DispatchOutcome::Continue;
        }
        self.history.push(trimmed.to_string());
        self.completion = CompletionState::default();

        let mut ctx = ExecutionContext::new(
            &mut self.store,
            &self.services,
            &self.config,
            &self.history,
            output,
        );
        dispatch(trimmed, &mut ctx)
    }

    /// Feeds one key press to the completion engine. `input` is the line after the key applied.
    pub fn key(&mut self, key: InputKey, input: &str) -> Vec<CompletionEffect> {
        match action_for_key(key, input) {
            Some(action) => reduce_completion(&mut self.completion, &self.tree, action),
            None => Vec::new(),
        }
    }

    /// Computes candidates for `input` and accepts the only one, if unambiguous.
    pub fn complete_line(&mut self, input: &str) -> LineCompletion {
        self.key(InputKey::Edit, input);
        let suggestions = self.completion.suggestions.clone();
        let completed = if suggestions.len() == 1 {
            self.key(InputKey::Tab, input)
                .into_iter()
                .find_map(|effect| match effect {
                    CompletionEffect::ReplaceInput { text } => Some(text),
                    _ => None,
                })
        } else {
            self.key(InputKey::Escape, input);
            None
        };
        LineCompletion {
            suggestions,
            completed,
        }
    }

    /// Performs a global hotkey action on the UI thread.
    pub fn handle_hotkey(&self, action: HotkeyAction) {
        tracing::debug!(?action, "hotkey");
        match action {
            HotkeyAction::ToggleSize => self.services.ui.toggle_size(),
            HotkeyAction::ToggleVisibility => self.services.ui.toggle_visibility(),
            HotkeyAction::FocusInput => self.services.ui.focus_input(),
        }
    }

    /// Adds an alias outside the command line, e.g. from a settings form.
    ///
    /// # Errors
    ///
    /// Returns the store's validation or persistence failure.
    pub fn add_shortcut(
        &mut self,
        category: ShortcutCategory,
        alias: &str,
        target: &str,
    ) -> Result<(), ShellError> {
        self.store.add(category, alias, target).map_err(ShellError::from)
    }

    /// Current completion state.
    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    /// Lines submitted so far.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Shortcut store.
    pub fn store(&self) -> &ShortcutStore {
        &self.store
    }

    /// Autocomplete tree.
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Runtime settings.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}
