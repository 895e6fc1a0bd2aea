//! Persisted launcher shortcuts: program, folder, and website aliases, theme definitions, the
//! last-used theme, and the JSON helpers used to load the command tree.
//!
//! Loading never fails as a whole. A missing or malformed category file degrades to an empty
//! category and is logged once; adding an alias rewrites that category's file in full.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod files;
pub mod store;

pub use error::StoreError;
pub use files::{load_json_or_default, read_json, write_json};
pub use store::{
    normalize_alias, AliasMap, ShortcutPaths, ShortcutSet, ShortcutStore, ThemeMap,
    COMMAND_TREE_FILE, FOLDERS_FILE, LAST_THEME_FILE, PROGRAMS_FILE, THEMES_FILE, WEBSITES_FILE,
};
