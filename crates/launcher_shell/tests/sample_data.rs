//! The settings and data files shipped at the repository root stay loadable and complete.

use std::path::{Path, PathBuf};

use launcher_completion::suggest;
use launcher_contract::CommandKind;
use launcher_shell::services::remote::NEWS_CATEGORIES;
use launcher_shell::{load_command_tree, ShellConfig};
use launcher_shortcuts::{ShortcutPaths, ShortcutStore};
use pretty_assertions::assert_eq;

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn shipped_settings_parse() {
    let config = ShellConfig::load(repo_root().join("launcher.toml")).expect("launcher.toml");
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert!(!config.allow_power_control);
    assert_eq!(config.ping_count, 4);
}

#[test]
fn shipped_tree_covers_every_command_word() {
    let tree = load_command_tree(&repo_root().join("data/command_tree.json"));
    assert!(!tree.is_empty());

    let specials = ["exit", "help", "sysinfo", "history", "date", "showthemes"];
    let power = ["shutdown", "restart", "sleep"];
    let network = ["traceroute", "portscan"];
    let words = CommandKind::ALL
        .iter()
        .map(|kind| kind.word())
        .chain(specials)
        .chain(power)
        .chain(network);
    for word in words {
        assert!(tree.child(word).is_some(), "missing '{word}'");
    }

    assert_eq!(suggest(&tree, "news "), NEWS_CATEGORIES.to_vec());
    assert_eq!(suggest(&tree, "addshortcut "), vec!["website", "folder", "open"]);
}

#[test]
fn shipped_themes_load() {
    let store = ShortcutStore::open(ShortcutPaths::in_dir(repo_root().join("data")));
    let names = store.shortcuts().themes.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["dark", "light", "solarized"]);
    let dark = store.shortcuts().theme("DARK").expect("dark theme");
    assert_eq!(dark.background_color, "#1e1e1e");
}
