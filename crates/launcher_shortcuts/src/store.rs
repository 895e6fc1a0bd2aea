//! Shortcut categories, their backing files, and the add/lookup store.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use launcher_contract::{ShortcutCategory, ThemeColors};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::files::{load_json_or_default, read_json, write_json};

/// Program shortcut file name.
pub const PROGRAMS_FILE: &str = "shortcuts.json";
/// Website shortcut file name.
pub const WEBSITES_FILE: &str = "web_shortcuts.json";
/// Folder shortcut file name.
pub const FOLDERS_FILE: &str = "folder_shortcuts.json";
/// Theme definition file name.
pub const THEMES_FILE: &str = "themes.json";
/// Last-used theme file name.
pub const LAST_THEME_FILE: &str = "last_theme.json";
/// Command tree file name.
pub const COMMAND_TREE_FILE: &str = "command_tree.json";

/// Alias to string target map, in file order.
pub type AliasMap = IndexMap<String, String>;

/// Alias to theme colors map, in file order.
pub type ThemeMap = IndexMap<String, ThemeColors>;

/// Normalizes an alias for storage and lookup.
///
/// Aliases are case-insensitive everywhere: they are trimmed and lower-cased on load, on add, and
/// before every lookup.
pub fn normalize_alias(alias: &str) -> String {
    alias.trim().to_lowercase()
}

/// Locations of every persisted launcher document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutPaths {
    /// Program shortcuts.
    pub programs: PathBuf,
    /// Website shortcuts.
    pub websites: PathBuf,
    /// Folder shortcuts.
    pub folders: PathBuf,
    /// Theme definitions.
    pub themes: PathBuf,
    /// Last-used theme name.
    pub last_theme: PathBuf,
    /// Nested autocomplete tree.
    pub command_tree: PathBuf,
}

impl ShortcutPaths {
    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            programs: dir.join(PROGRAMS_FILE),
            websites: dir.join(WEBSITES_FILE),
            folders: dir.join(FOLDERS_FILE),
            themes: dir.join(THEMES_FILE),
            last_theme: dir.join(LAST_THEME_FILE),
            command_tree: dir.join(COMMAND_TREE_FILE),
        }
    }

    /// Backing file for one shortcut category.
    pub fn category_file(&self, category: ShortcutCategory) -> &Path {
        match category {
            ShortcutCategory::Programs => &self.programs,
            ShortcutCategory::Websites => &self.websites,
            ShortcutCategory::Folders => &self.folders,
            ShortcutCategory::Themes => &self.themes,
        }
    }
}

/// The four shortcut categories held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutSet {
    /// Program aliases to shell command lines.
    pub programs: AliasMap,
    /// Folder aliases to directory paths.
    pub folders: AliasMap,
    /// Website aliases to URLs.
    pub websites: AliasMap,
    /// Theme names to color pairs.
    pub themes: ThemeMap,
}

impl ShortcutSet {
    /// Returns the string map for a path-bearing category.
    pub fn aliases(&self, category: ShortcutCategory) -> Option<&AliasMap> {
        match category {
            ShortcutCategory::Programs => Some(&self.programs),
            ShortcutCategory::Folders => Some(&self.folders),
            ShortcutCategory::Websites => Some(&self.websites),
            ShortcutCategory::Themes => None,
        }
    }

    fn aliases_mut(&mut self, category: ShortcutCategory) -> Option<&mut AliasMap> {
        match category {
            ShortcutCategory::Programs => Some(&mut self.programs),
            ShortcutCategory::Folders => Some(&mut self.folders),
            ShortcutCategory::Websites => Some(&mut self.websites),
            ShortcutCategory::Themes => None,
        }
    }

    /// Resolves a path-bearing alias.
    pub fn lookup(&self, category: ShortcutCategory, alias: &str) -> Option<&str> {
        self.aliases(category)?
            .get(&normalize_alias(alias))
            .map(String::as_str)
    }

    /// Resolves a theme by name.
    pub fn theme(&self, name: &str) -> Option<&ThemeColors> {
        self.themes.get(&normalize_alias(name))
    }

    /// Loads every category from `paths`, failing soft per category.
    pub fn load(paths: &ShortcutPaths) -> Self {
        Self {
            programs: normalize_keys(load_json_or_default(&paths.programs, "program shortcuts")),
            folders: normalize_keys(load_json_or_default(&paths.folders, "folder shortcuts")),
            websites: normalize_keys(load_json_or_default(&paths.websites, "website shortcuts")),
            themes: normalize_keys(load_json_or_default(&paths.themes, "themes")),
        }
    }
}

fn normalize_keys<V>(map: IndexMap<String, V>) -> IndexMap<String, V> {
    map.into_iter()
        .map(|(alias, value)| (normalize_alias(&alias), value))
        .collect()
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LastThemeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_theme: Option<String>,
}

/// Shortcut set plus the files it was loaded from.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    paths: ShortcutPaths,
    set: ShortcutSet,
}

impl ShortcutStore {
    /// Loads every category from `paths`.
    pub fn open(paths: ShortcutPaths) -> Self {
        let set = ShortcutSet::load(&paths);
        tracing::debug!(
            programs = set.programs.len(),
            folders = set.folders.len(),
            websites = set.websites.len(),
            themes = set.themes.len(),
            "shortcut store loaded"
        );
        Self { paths, set }
    }

    /// Wraps an already-built set, for callers that manage loading themselves.
    pub fn with_set(paths: ShortcutPaths, set: ShortcutSet) -> Self {
        Self { paths, set }
    }

    /// Backing file locations.
    pub fn paths(&self) -> &ShortcutPaths {
        &self.paths
    }

    /// Current in-memory shortcuts.
    pub fn shortcuts(&self) -> &ShortcutSet {
        &self.set
    }

    /// Adds or overwrites one alias and rewrites the whole category file.
    ///
    /// The category file is re-read first, so entries written since load are kept. A file that
    /// no longer parses is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReadOnlyCategory`] for themes, [`StoreError::EmptyField`] for a blank
    /// alias or target, [`StoreError::Parse`] or [`StoreError::Read`] when the current file cannot
    /// be read back, and I/O or serialization errors from persisting. The in-memory set is left
    /// unchanged on any error.
    pub fn add(
        &mut self,
        category: ShortcutCategory,
        alias: &str,
        target: &str,
    ) -> Result<(), StoreError> {
        if !category.is_path_bearing() {
            return Err(StoreError::ReadOnlyCategory(category));
        }
        let alias = normalize_alias(alias);
        let target = target.trim();
        if alias.is_empty() || target.is_empty() {
            return Err(StoreError::EmptyField);
        }

        let path = self.paths.category_file(category);
        let mut updated = read_json::<AliasMap>(path)?
            .map(normalize_keys)
            .unwrap_or_default();
        updated.insert(alias.clone(), target.to_string());
        write_json(path, &updated)?;
        tracing::info!(%category, %alias, path = %path.display(), "shortcut saved");

        if let Some(aliases) = self.set.aliases_mut(category) {
            *aliases = updated;
        }
        Ok(())
    }

    /// Returns the persisted last theme if it still names a loaded theme.
    pub fn load_last_theme(&self) -> Option<String> {
        let record = match read_json::<LastThemeRecord>(&self.paths.last_theme) {
            Ok(record) => record?,
            Err(err) => {
                tracing::warn!("{err}; ignoring last theme");
                return None;
            }
        };
        let name = normalize_alias(&record.last_theme?);
        self.set.themes.contains_key(&name).then_some(name)
    }

    /// Overwrites the persisted last theme.
    ///
    /// # Errors
    ///
    /// Returns I/O or serialization errors from persisting.
    pub fn save_last_theme(&self, name: &str) -> Result<(), StoreError> {
        write_json(
            &self.paths.last_theme,
            &LastThemeRecord {
                last_theme: Some(normalize_alias(name)),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn store_in(dir: &Path) -> ShortcutStore {
        ShortcutStore::open(ShortcutPaths::in_dir(dir))
    }

    #[test]
    fn missing_directory_loads_empty_set() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir.path().join("absent"));
        assert_eq!(store.shortcuts(), &ShortcutSet::default());
        assert_eq!(store.load_last_theme(), None);
    }

    #[test]
    fn malformed_category_does_not_abort_other_categories() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join(PROGRAMS_FILE), "{\"notepad\": ").expect("write programs");
        fs::write(
            dir.path().join(WEBSITES_FILE),
            r#"{"gh": "https://github.com"}"#,
        )
        .expect("write websites");

        let store = store_in(dir.path());
        assert!(store.shortcuts().programs.is_empty());
        assert_eq!(
            store
                .shortcuts()
                .lookup(ShortcutCategory::Websites, "gh"),
            Some("https://github.com")
        );
    }

    #[test]
    fn add_then_load_round_trips_alias() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(dir.path());
        store
            .add(ShortcutCategory::Folders, "foo", "bar")
            .expect("add folder");

        let reloaded = ShortcutSet::load(&ShortcutPaths::in_dir(dir.path()));
        assert_eq!(reloaded.lookup(ShortcutCategory::Folders, "foo"), Some("bar"));
        assert_eq!(store.shortcuts(), &reloaded);
    }

    #[test]
    fn add_overwrites_and_keeps_existing_entries() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(PROGRAMS_FILE),
            r#"{"notepad": "notepad.exe", "calc": "calc.exe"}"#,
        )
        .expect("write programs");
        let mut store = store_in(dir.path());

        store
            .add(ShortcutCategory::Programs, "Notepad", "gedit")
            .expect("overwrite");
        store
            .add(ShortcutCategory::Programs, "term", "xterm")
            .expect("append");

        let keys: Vec<_> = store.shortcuts().programs.keys().cloned().collect();
        assert_eq!(keys, vec!["notepad", "calc", "term"]);
        assert_eq!(
            store.shortcuts().lookup(ShortcutCategory::Programs, "NOTEPAD"),
            Some("gedit")
        );
    }

    #[test]
    fn add_rejects_themes_and_blank_fields() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(dir.path());

        assert!(matches!(
            store.add(ShortcutCategory::Themes, "dark", "#000"),
            Err(StoreError::ReadOnlyCategory(ShortcutCategory::Themes))
        ));
        assert!(matches!(
            store.add(ShortcutCategory::Websites, "  ", "https://x.dev"),
            Err(StoreError::EmptyField)
        ));
        assert!(matches!(
            store.add(ShortcutCategory::Websites, "x", ""),
            Err(StoreError::EmptyField)
        ));
        assert!(!dir.path().join(WEBSITES_FILE).exists());
    }

    #[test]
    fn aliases_are_case_insensitive_on_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(THEMES_FILE),
            r##"{"Dracula": {"bg": "#282a36", "fg": "#f8f8f2"}}"##,
        )
        .expect("write themes");
        let store = store_in(dir.path());
        assert_eq!(
            store.shortcuts().theme("DRACULA"),
            Some(&ThemeColors::new("#282a36", "#f8f8f2"))
        );
    }

    #[test]
    fn last_theme_must_name_a_loaded_theme() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(THEMES_FILE),
            r##"{"dark": {"bg": "#000000", "fg": "#ffffff"}}"##,
        )
        .expect("write themes");
        let store = store_in(dir.path());

        store.save_last_theme("light").expect("save unknown theme");
        assert_eq!(store.load_last_theme(), None);

        store.save_last_theme("Dark").expect("save known theme");
        assert_eq!(store.load_last_theme(), Some("dark".to_string()));
        let raw = fs::read_to_string(dir.path().join(LAST_THEME_FILE)).expect("read last theme");
        assert!(raw.contains("\"last_theme\": \"dark\""), "unexpected file: {raw}");
    }

    #[test]
    fn add_keeps_entries_written_after_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(dir.path());
        fs::write(
            dir.path().join(WEBSITES_FILE),
            r#"{"GH": "https://github.com"}"#,
        )
        .expect("write websites");

        store
            .add(ShortcutCategory::Websites, "docs", "https://docs.rs")
            .expect("add");

        let reopened = store_in(dir.path());
        let aliases = reopened
            .shortcuts()
            .websites
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        assert_eq!(aliases, vec!["gh", "docs"]);
        assert_eq!(store.shortcuts(), reopened.shortcuts());
    }

    #[test]
    fn add_refuses_to_overwrite_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let programs = dir.path().join(PROGRAMS_FILE);
        let original = r#"{"notepad": "notepad.exe", "calc": "calc.exe",}"#;
        fs::write(&programs, original).expect("write programs");
        let mut store = store_in(dir.path());
        assert!(store.shortcuts().programs.is_empty());

        let err = store
            .add(ShortcutCategory::Programs, "term", "xterm")
            .expect_err("malformed file");
        assert!(matches!(err, StoreError::Parse { .. }));
        assert_eq!(fs::read_to_string(&programs).expect("read programs"), original);
        assert!(store.shortcuts().programs.is_empty());
    }
}
