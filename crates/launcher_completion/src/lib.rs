//! Command-tree autocomplete for the launcher input line.
//!
//! The tree maps each command word to the words that may follow it. [`suggest`] turns the current
//! input into next-word candidates and [`reduce_completion`] drives the suggestion list through
//! its idle, suggesting, and selected phases, emitting render effects for the front end.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod reducer;
pub mod tree;

pub use reducer::{
    accept_suggestion, action_for_key, reduce_completion, render_preview, suggest,
    CompletionAction, CompletionEffect, CompletionPhase, CompletionState, InputKey, PREVIEW_DEPTH,
};
pub use tree::CommandTree;
