//! Completion actions, render effects, and transition logic for the input line.

use crate::tree::CommandTree;

/// Maximum subtree depth rendered in the preview.
pub const PREVIEW_DEPTH: usize = 3;

/// Where the suggestion list currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionPhase {
    /// No suggestion list is shown.
    #[default]
    Idle,
    /// A list is shown with nothing highlighted.
    Suggesting,
    /// One entry is highlighted.
    Selected {
        /// Index into [`CompletionState::suggestions`].
        index: usize,
    },
}

/// Suggestion list state for one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    /// Current phase.
    pub phase: CompletionPhase,
    /// Suggestions in tree order; empty while idle.
    pub suggestions: Vec<String>,
    /// Rendered subtree of the highlighted suggestion, if it has children.
    pub preview: Option<String>,
    completed: Vec<String>,
}

impl CompletionState {
    /// The highlighted suggestion, if any.
    pub fn selected(&self) -> Option<&str> {
        match self.phase {
            CompletionPhase::Selected { index } => self.suggestions.get(index).map(String::as_str),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.phase = CompletionPhase::Idle;
        self.suggestions.clear();
        self.preview = None;
        self.completed.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_completion`].
pub enum CompletionAction {
    /// The input text changed through a non-navigation key.
    InputChanged {
        /// Full input text after the edit.
        input: String,
    },
    /// Highlight the next suggestion, wrapping to the first.
    MoveDown,
    /// Highlight the previous suggestion, wrapping to the last.
    MoveUp,
    /// Dismiss the list.
    Cancel,
    /// Insert the highlighted (or first) suggestion into the input.
    Accept {
        /// Full input text the suggestion is applied to.
        input: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render intents emitted by [`reduce_completion`] for the front end to apply.
pub enum CompletionEffect {
    /// Show or refresh the suggestion list.
    ShowSuggestions,
    /// Hide the suggestion list and preview.
    HideSuggestions,
    /// Move the highlight and refresh the preview.
    HighlightSuggestion {
        /// Highlighted index.
        index: usize,
    },
    /// Replace the input text.
    ReplaceInput {
        /// New input text.
        text: String,
    },
}

/// Keys the input field forwards to the completion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Return; submits the line instead of completing.
    Enter,
    /// Arrow left or right, home, end.
    Cursor,
    /// Any text-editing key.
    Edit,
}

impl InputKey {
    /// Returns whether this key moves or commits rather than editing text.
    pub fn is_navigation(self) -> bool {
        !matches!(self, Self::Edit)
    }
}

/// Maps a key press (with the input text after it was applied) to a completion action.
pub fn action_for_key(key: InputKey, input: &str) -> Option<CompletionAction> {
    match key {
        InputKey::Up => Some(CompletionAction::MoveUp),
        InputKey::Down => Some(CompletionAction::MoveDown),
        InputKey::Escape => Some(CompletionAction::Cancel),
        InputKey::Tab => Some(CompletionAction::Accept {
            input: input.to_string(),
        }),
        InputKey::Enter | InputKey::Cursor => None,
        InputKey::Edit => Some(CompletionAction::InputChanged {
            input: input.to_string(),
        }),
    }
}

/// Splits input into completed words and the partially typed last word.
///
/// When the input is empty or ends in whitespace the partial word is empty.
fn split_input(input: &str) -> (Vec<&str>, &str) {
    let mut words = input.split_whitespace().collect::<Vec<_>>();
    if input.is_empty() || input.ends_with(char::is_whitespace) {
        return (words, "");
    }
    let partial = words.pop().unwrap_or_default();
    (words, partial)
}

/// Next-word suggestions for `input`, in tree order.
///
/// Completed words are followed case-insensitively; children are kept when their lower-cased
/// form starts with the lower-cased partial word. Display case is preserved.
pub fn suggest(tree: &CommandTree, input: &str) -> Vec<String> {
    let (completed, partial) = split_input(input);
    let Some(node) = tree.walk(completed) else {
        return Vec::new();
    };
    let partial = partial.to_lowercase();
    node.words()
        .filter(|word| word.to_lowercase().starts_with(&partial))
        .map(str::to_string)
        .collect()
}

/// Replaces the last whitespace-delimited token of `input` with `value`.
///
/// Appends one space when the resulting path reaches a node with children.
pub fn accept_suggestion(tree: &CommandTree, input: &str, value: &str) -> String {
    let base = match input.char_indices().rev().find(|(_, ch)| ch.is_whitespace()) {
        Some((index, ch)) => &input[..index + ch.len_utf8()],
        None => "",
    };
    let mut text = format!("{base}{value}");
    let has_children = tree
        .walk(text.split_whitespace())
        .is_some_and(|node| !node.is_leaf());
    if has_children {
        text.push(' ');
    }
    text
}

/// Renders the subtree under `node` as indented lines, down to `max_depth` levels.
pub fn render_preview(node: &CommandTree, max_depth: usize) -> String {
    let mut lines = Vec::new();
    push_preview_lines(node, 0, max_depth, &mut lines);
    lines.join("\n")
}

fn push_preview_lines(node: &CommandTree, depth: usize, max_depth: usize, lines: &mut Vec<String>) {
    if depth >= max_depth {
        return;
    }
    for (word, child) in node.entries() {
        let marker = if child.is_leaf() { "" } else { " ..." };
        lines.push(format!("{}{word}{marker}", "  ".repeat(depth)));
        push_preview_lines(child, depth + 1, max_depth, lines);
    }
}

fn preview_for(tree: &CommandTree, completed: &[String], selected: &str) -> Option<String> {
    let node = tree.walk(
        completed
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(selected)),
    )?;
    (!node.is_leaf()).then(|| render_preview(node, PREVIEW_DEPTH))
}

fn select(state: &mut CompletionState, tree: &CommandTree, index: usize) -> Vec<CompletionEffect> {
    state.phase = CompletionPhase::Selected { index };
    state.preview = state
        .suggestions
        .get(index)
        .and_then(|selected| preview_for(tree, &state.completed, selected));
    vec![CompletionEffect::HighlightSuggestion { index }]
}

/// Applies `action` to `state` and returns the render effects the front end should perform.
pub fn reduce_completion(
    state: &mut CompletionState,
    tree: &CommandTree,
    action: CompletionAction,
) -> Vec<CompletionEffect> {
    match action {
        CompletionAction::InputChanged { input } => {
            let was_idle = state.phase == CompletionPhase::Idle;
            let suggestions = suggest(tree, &input);
            if suggestions.is_empty() {
                state.clear();
                return if was_idle {
                    Vec::new()
                } else {
                    vec![CompletionEffect::HideSuggestions]
                };
            }
            let (completed, _) = split_input(&input);
            state.completed = completed.into_iter().map(str::to_string).collect();
            state.suggestions = suggestions;
            state.phase = CompletionPhase::Suggesting;
            state.preview = None;
            vec![CompletionEffect::ShowSuggestions]
        }
        CompletionAction::MoveDown => {
            let len = state.suggestions.len();
            match state.phase {
                CompletionPhase::Idle => Vec::new(),
                _ if len == 0 => Vec::new(),
                CompletionPhase::Suggesting => select(state, tree, 0),
                CompletionPhase::Selected { index } => select(state, tree, (index + 1) % len),
            }
        }
        CompletionAction::MoveUp => {
            let len = state.suggestions.len();
            match state.phase {
                CompletionPhase::Idle => Vec::new(),
                _ if len == 0 => Vec::new(),
                CompletionPhase::Suggesting => select(state, tree, len - 1),
                CompletionPhase::Selected { index } => {
                    select(state, tree, (index + len - 1) % len)
                }
            }
        }
        CompletionAction::Cancel => {
            if state.phase == CompletionPhase::Idle {
                return Vec::new();
            }
            state.clear();
            vec![CompletionEffect::HideSuggestions]
        }
        CompletionAction::Accept { input } => {
            let chosen = match state.phase {
                CompletionPhase::Idle => None,
                CompletionPhase::Suggesting => state.suggestions.first().cloned(),
                CompletionPhase::Selected { .. } => state.selected().map(str::to_string),
            };
            let Some(chosen) = chosen else {
                return Vec::new();
            };
            let text = accept_suggestion(tree, &input, &chosen);
            state.clear();
            vec![
                CompletionEffect::ReplaceInput { text },
                CompletionEffect::HideSuggestions,
            ]
        }
    }
}
