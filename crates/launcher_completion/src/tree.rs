//! Nested command-word tree used for suggestions and previews.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from command word to the words that may follow it.
///
/// Leaves are empty maps. Sibling order is the order the words were inserted (or appeared in the
/// persisted JSON object) and is the order suggestions are presented in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandTree {
    children: IndexMap<String, CommandTree>,
}

impl CommandTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for literal trees.
    pub fn with(mut self, word: impl Into<String>, child: CommandTree) -> Self {
        self.insert(word, child);
        self
    }

    /// Builder-style insert of a leaf word.
    pub fn with_leaf(self, word: impl Into<String>) -> Self {
        self.with(word, CommandTree::new())
    }

    /// Inserts or replaces one child. Replacing keeps the existing sibling position.
    pub fn insert(&mut self, word: impl Into<String>, child: CommandTree) {
        self.children.insert(word.into(), child);
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Child words paired with their subtrees, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CommandTree)> {
        self.children.iter().map(|(word, child)| (word.as_str(), child))
    }

    /// Finds a direct child, ignoring case.
    pub fn child(&self, word: &str) -> Option<&CommandTree> {
        if let Some(exact) = self.children.get(word) {
            return Some(exact);
        }
        let wanted = word.to_lowercase();
        self.children
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
            .map(|(_, child)| child)
    }

    /// Follows `path` from this node. Returns `None` as soon as a word has no matching child.
    pub fn walk<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<&CommandTree> {
        path.into_iter()
            .try_fold(self, |node, word| node.child(word))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn json_object_order_is_preserved() {
        let tree: CommandTree = serde_json::from_str(
            r#"{"website": {}, "open": {"notepad": {}}, "addshortcut": {"website": {}, "folder": {}}}"#,
        )
        .expect("parse tree");
        assert_eq!(
            tree.words().collect::<Vec<_>>(),
            vec!["website", "open", "addshortcut"]
        );
        assert!(tree.child("website").expect("website").is_leaf());
        assert_eq!(tree.walk(["addshortcut"]).expect("addshortcut").len(), 2);
    }

    #[test]
    fn walk_ignores_case_and_stops_on_unknown_words() {
        let tree = CommandTree::new().with(
            "Spotify",
            CommandTree::new().with_leaf("play").with_leaf("pause"),
        );
        assert!(tree.walk(["spotify", "PLAY"]).expect("play").is_leaf());
        assert_eq!(tree.walk(["spotify", "stop"]), None);
        assert_eq!(tree.walk(["news"]), None);
        assert_eq!(tree.walk(std::iter::empty()), Some(&tree));
    }

    #[test]
    fn serializes_leaves_as_empty_objects() {
        let tree = CommandTree::new().with("theme", CommandTree::new().with_leaf("dark"));
        assert_eq!(
            serde_json::to_string(&tree).expect("serialize"),
            r#"{"theme":{"dark":{}}}"#
        );
    }
}
