// src/explorer/tree.rs
use super::node::{empty_list, Node, NodeList};
use super::path::ExplorerPath;
use std::sync::Arc;

/// Children of the folder addressed by `path`, or `tree` itself at root.
///
/// A missing segment yields an empty list. So does a path running through a
/// file, since files have no children. Callers cannot tell either case from
/// an empty folder.
pub fn resolve_at(tree: &NodeList, path: &ExplorerPath) -> NodeList {
    let mut current = tree;
    for segment in path.segments() {
        match current.iter().find(|node| node.id().as_str() == segment) {
            Some(node) => current = node.children(),
            None => return empty_list(),
        }
    }
    Arc::clone(current)
}

/// Returns a new root list with `node` appended to the children of the
/// folder addressed by `segments`.
///
/// Every node from the root down to the insertion point is a fresh copy and
/// siblings are shared. If a segment names no folder the input list comes
/// back as-is (same allocation), so `Arc::ptr_eq` tells whether anything
/// changed.
pub fn insert_at(tree: &NodeList, segments: &[&str], node: Node) -> NodeList {
    let Some((head, rest)) = segments.split_first() else {
        let mut items: Vec<Arc<Node>> = tree.to_vec();
        items.push(Arc::new(node));
        return items.into();
    };

    let Some(index) = tree
        .iter()
        .position(|child| child.is_folder() && child.id().as_str() == *head)
    else {
        return Arc::clone(tree);
    };

    let folder = &tree[index];
    let children = insert_at(folder.children(), rest, node);
    if Arc::ptr_eq(&children, folder.children()) {
        return Arc::clone(tree);
    }

    let mut items: Vec<Arc<Node>> = tree.to_vec();
    items[index] = Arc::new(folder.with_children(children));
    items.into()
}

/// First node in `nodes` with the same name and extension.
pub fn find_entry<'a>(nodes: &'a [Arc<Node>], name: &str, extension: &str) -> Option<&'a Arc<Node>> {
    nodes
        .iter()
        .find(|node| node.name() == name && node.file_extension() == extension)
}

/// Startup contents of the explorer.
pub fn seed_tree() -> NodeList {
    vec![
        Node::folder_with("Pictures", vec![Node::folder("January"), Node::folder("Test")]),
        Node::folder("Documents"),
        Node::folder("Music"),
        Node::file("notes", "txt"),
    ]
    .into_iter()
    .map(Arc::new)
    .collect()
}
