// src/utils/formatter.rs
use crate::error::Result;
use crate::explorer::{Node, NodeList};
use colored::Colorize;

/// Indented outline of the tree, two spaces per level. Folders come out
/// blue and bold when colour is enabled.
pub fn format_tree(nodes: &NodeList, show_extensions: bool) -> String {
    let mut out = String::new();
    write_level(&mut out, nodes, 0, show_extensions);
    out
}

fn write_level(out: &mut String, nodes: &NodeList, depth: usize, show_extensions: bool) {
    for node in nodes.iter() {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&entry_label(node, show_extensions));
        out.push('\n');
        write_level(out, node.children(), depth + 1, show_extensions);
    }
}

fn entry_label(node: &Node, show_extensions: bool) -> String {
    if node.is_folder() {
        let label = if show_extensions { node.full_name().to_string() } else { format!("{}/", node.name()) };
        label.blue().bold().to_string()
    } else {
        node.full_name().to_string()
    }
}

pub fn format_json(nodes: &NodeList) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}
