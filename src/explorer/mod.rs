// src/explorer/mod.rs
pub mod node;
pub mod path;
pub mod selection;
pub mod store;
pub mod tree;

pub use node::{Node, NodeId, NodeList, NodeMeta};
pub use path::ExplorerPath;
pub use selection::Selection;
pub use store::{CreateOutcome, DuplicateScope, ExplorerStore};
pub use tree::{insert_at, resolve_at, seed_tree};
