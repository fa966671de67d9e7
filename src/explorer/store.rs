// src/explorer/store.rs
use super::node::{Node, NodeId, NodeList, FOLDER_EXTENSION};
use super::path::ExplorerPath;
use super::selection::Selection;
use super::tree::{find_entry, insert_at, resolve_at, seed_tree};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which node list the duplicate-name guard looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScope {
    /// Top-level list, wherever the user has navigated to.
    #[default]
    Root,
    /// Children of the folder at the current path.
    CurrentFolder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(NodeId),
    /// Blank name, nothing to do.
    Ignored,
    Duplicate { full_name: String },
    /// The current path does not address a folder.
    Dropped,
}

impl CreateOutcome {
    /// Advisory text to show the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            CreateOutcome::Duplicate { full_name } => {
                Some(format!("File named: {} already exists.", full_name))
            }
            _ => None,
        }
    }
}

/// Explorer session state: the tree, where the user is, what is selected.
#[derive(Debug, Clone)]
pub struct ExplorerStore {
    data: NodeList,
    current_path: ExplorerPath,
    selected: Selection,
    duplicate_scope: DuplicateScope,
}

impl ExplorerStore {
    pub fn new(data: NodeList, duplicate_scope: DuplicateScope) -> Self {
        ExplorerStore {
            data,
            current_path: ExplorerPath::root(),
            selected: Selection::new(),
            duplicate_scope,
        }
    }

    pub fn with_seed() -> Self {
        Self::new(seed_tree(), DuplicateScope::default())
    }

    pub fn data(&self) -> &NodeList {
        &self.data
    }

    pub fn current_path(&self) -> &ExplorerPath {
        &self.current_path
    }

    pub fn duplicate_scope(&self) -> DuplicateScope {
        self.duplicate_scope
    }

    pub fn selected_items(&self) -> &[NodeId] {
        self.selected.items()
    }

    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.contains(id)
    }

    pub fn current_entries(&self) -> NodeList {
        resolve_at(&self.data, &self.current_path)
    }

    pub fn set_current_path(&mut self, path: ExplorerPath) {
        debug!(from = %self.current_path, to = %path, "set path");
        self.current_path = path;
    }

    pub fn go_home(&mut self) {
        self.set_current_path(ExplorerPath::root());
    }

    /// Appends `segment` to the current path without checking the tree.
    pub fn descend(&mut self, segment: &str) {
        let path = self.current_path.descend(segment);
        self.set_current_path(path);
    }

    /// Descends into `node` if it is a folder.
    pub fn enter_folder(&mut self, node: &Node) -> bool {
        if !node.is_folder() {
            return false;
        }
        self.descend(node.id().as_str());
        true
    }

    pub fn go_back(&mut self) {
        let path = self.current_path.ascend();
        self.set_current_path(path);
    }

    pub fn select_one(&mut self, id: NodeId) {
        debug!(%id, "select one");
        self.selected.select_one(id);
    }

    pub fn add_to_select(&mut self, id: NodeId) {
        if !self.selected.add(id.clone()) {
            debug!(%id, "already selected");
        }
    }

    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Inserts `node` under the current path. Returns whether the tree changed.
    pub fn add_item(&mut self, node: Node) -> bool {
        let segments = self.current_path.segments();
        let updated = insert_at(&self.data, &segments, node);
        if Arc::ptr_eq(&updated, &self.data) {
            debug!(path = %self.current_path, "insert dropped");
            return false;
        }
        self.data = updated;
        true
    }

    pub fn create_folder(&mut self, name: &str) -> CreateOutcome {
        let name = name.trim();
        if name.is_empty() {
            return CreateOutcome::Ignored;
        }

        let scope = match self.duplicate_scope {
            DuplicateScope::Root => Arc::clone(&self.data),
            DuplicateScope::CurrentFolder => self.current_entries(),
        };
        if let Some(existing) = find_entry(&scope, name, FOLDER_EXTENSION) {
            warn!(full_name = existing.full_name(), "duplicate folder name");
            return CreateOutcome::Duplicate { full_name: existing.full_name().to_string() };
        }

        let folder = Node::folder(name);
        let id = folder.id().clone();
        if !self.add_item(folder) {
            return CreateOutcome::Dropped;
        }
        info!(%id, name, path = %self.current_path, "folder created");
        CreateOutcome::Created(id)
    }
}

impl Default for ExplorerStore {
    fn default() -> Self {
        Self::with_seed()
    }
}
