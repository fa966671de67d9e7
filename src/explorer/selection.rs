// src/explorer/selection.rs
use super::node::NodeId;

/// Selected node ids in the order they were picked. Holds each id once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Replaces the selection with `id`.
    pub fn select_one(&mut self, id: NodeId) {
        self.items.clear();
        self.items.push(id);
    }

    /// Adds `id`; returns false when it was already selected.
    pub fn add(&mut self, id: NodeId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.items.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.items.iter().any(|item| item == id)
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_one_replaces() {
        let mut sel = Selection::new();
        sel.add(NodeId::from("a"));
        sel.add(NodeId::from("b"));
        sel.select_one(NodeId::from("c"));
        assert_eq!(sel.items(), &[NodeId::from("c")]);
    }

    #[test]
    fn test_add_deduplicates() {
        let mut sel = Selection::new();
        assert!(sel.add(NodeId::from("a")));
        assert!(!sel.add(NodeId::from("a")));
        assert!(sel.add(NodeId::from("b")));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.add(NodeId::from("a"));
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.contains(&NodeId::from("a")));
    }
}
