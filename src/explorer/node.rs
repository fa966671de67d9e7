// src/explorer/node.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

pub const FOLDER_EXTENSION: &str = "folder";

/// Ordered, shared list of nodes. Cloning only bumps reference counts, so
/// untouched subtrees are shared between tree snapshots.
pub type NodeList = Arc<[Arc<Node>]>;

pub fn empty_list() -> NodeList {
    Arc::from(Vec::new())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn generate() -> Self {
        NodeId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeMeta {
    pub id: NodeId,
    pub is_folder: bool,
    pub name: String,
    pub file_extension: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl NodeMeta {
    fn new(name: &str, file_extension: &str, is_folder: bool) -> Self {
        NodeMeta {
            id: NodeId::generate(),
            is_folder,
            name: name.to_string(),
            file_extension: file_extension.to_string(),
            full_name: format!("{}.{}", name, file_extension),
            created_at: Utc::now(),
        }
    }
}

/// A file or folder entry. Only folders carry children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    meta: NodeMeta,
    children: NodeList,
}

impl Node {
    pub fn folder(name: &str) -> Self {
        Self::folder_with(name, Vec::new())
    }

    pub fn folder_with(name: &str, children: Vec<Node>) -> Self {
        Node {
            meta: NodeMeta::new(name, FOLDER_EXTENSION, true),
            children: children.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn file(name: &str, file_extension: &str) -> Self {
        Node {
            meta: NodeMeta::new(name, file_extension, false),
            children: empty_list(),
        }
    }

    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn id(&self) -> &NodeId {
        &self.meta.id
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn file_extension(&self) -> &str {
        &self.meta.file_extension
    }

    pub fn full_name(&self) -> &str {
        &self.meta.full_name
    }

    pub fn is_folder(&self) -> bool {
        self.meta.is_folder
    }

    pub fn children(&self) -> &NodeList {
        &self.children
    }

    /// Same node with its child list swapped. Files keep their empty list.
    pub(crate) fn with_children(&self, children: NodeList) -> Self {
        if !self.meta.is_folder {
            return self.clone();
        }
        Node { meta: self.meta.clone(), children }
    }
}
