// src/config/mod.rs
use crate::error::{ExplorerError, Result};
use crate::explorer::node::{Node, NodeList, FOLDER_EXTENSION};
use crate::explorer::{seed_tree, DuplicateScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const APP_DIR: &str = "treexp";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "treexp.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub duplicate_scope: DuplicateScope,
    pub show_extensions: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub seed: Option<Vec<SeedNode>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            duplicate_scope: DuplicateScope::Root,
            show_extensions: false,
            log_level: "info".to_string(),
            log_file: None,
            seed: None,
        }
    }
}

/// Initial tree entry. No extension, or `"folder"`, means a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedNode {
    pub name: String,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub children: Vec<SeedNode>,
}

impl SeedNode {
    pub fn to_node(&self) -> Node {
        match self.extension.as_deref() {
            None | Some(FOLDER_EXTENSION) => {
                Node::folder_with(&self.name, self.children.iter().map(SeedNode::to_node).collect())
            }
            Some(ext) => Node::file(&self.name, ext),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads `path`, or the default location when `path` is `None`.
    /// A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ExplorerError::ConfigNotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| ExplorerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE)))
    }

    pub fn seed_tree(&self) -> NodeList {
        match &self.seed {
            Some(seed) => seed.iter().map(|s| Arc::new(s.to_node())).collect(),
            None => seed_tree(),
        }
    }
}
