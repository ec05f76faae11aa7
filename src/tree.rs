//! Document tree navigation.
//!
//! All name comparisons are case-insensitive. Searches are depth-first pre-order and the
//! first match wins, so results depend on the export's child ordering and nothing else.

use crate::figma::{DocumentNode, NodeType};

/// First node (root included) whose name equals `name`.
pub fn find_by_name<'a>(root: &'a DocumentNode, name: &str) -> Option<&'a DocumentNode> {
    let wanted = name.trim().to_lowercase();
    find_first(root, &|node| node.name.trim().to_lowercase() == wanted)
}

/// First node (root included) whose name contains `needle`.
pub fn find_by_name_contains<'a>(root: &'a DocumentNode, needle: &str) -> Option<&'a DocumentNode> {
    let wanted = needle.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    find_first(root, &|node| node.name.to_lowercase().contains(&wanted))
}

/// First strict descendant of `node_type`.
pub fn find_first_of_type(root: &DocumentNode, node_type: NodeType) -> Option<&DocumentNode> {
    root.children
        .iter()
        .find_map(|child| find_first(child, &|node| node.node_type == node_type))
}

/// First strict descendant matching `predicate`.
pub fn find_descendant<'a>(
    root: &'a DocumentNode,
    predicate: &dyn Fn(&DocumentNode) -> bool,
) -> Option<&'a DocumentNode> {
    root.children
        .iter()
        .find_map(|child| find_first(child, predicate))
}

/// Every node of `node_type` in the subtree (root included), in pre-order.
pub fn find_all_of_type(root: &DocumentNode, node_type: NodeType) -> Vec<&DocumentNode> {
    let mut found = Vec::new();
    visit(root, &mut |node| {
        if node.node_type == node_type {
            found.push(node);
        }
    });
    found
}

/// Locate a section by a priority list of candidate names.
///
/// Every candidate is tried as an exact name first; only when none matches exactly are the
/// candidates tried again as substrings, in the same order.
pub fn find_section<'a>(root: &'a DocumentNode, candidates: &[&str]) -> Option<&'a DocumentNode> {
    find_section_where(root, candidates, &|_| true)
}

/// [`find_section`] restricted to nodes accepted by `accept`.
pub fn find_section_where<'a>(
    root: &'a DocumentNode,
    candidates: &[&str],
    accept: &dyn Fn(&DocumentNode) -> bool,
) -> Option<&'a DocumentNode> {
    let wanted: Vec<String> = candidates
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    wanted
        .iter()
        .find_map(|name| {
            find_first(root, &|node| {
                accept(node) && node.name.trim().to_lowercase() == *name
            })
        })
        .or_else(|| {
            wanted.iter().find_map(|name| {
                find_first(root, &|node| {
                    accept(node) && node.name.to_lowercase().contains(name.as_str())
                })
            })
        })
}

/// Pre-order visit of the whole subtree.
pub fn visit<'a>(node: &'a DocumentNode, visitor: &mut impl FnMut(&'a DocumentNode)) {
    visitor(node);
    for child in &node.children {
        visit(child, visitor);
    }
}

fn find_first<'a>(
    node: &'a DocumentNode,
    predicate: &dyn Fn(&DocumentNode) -> bool,
) -> Option<&'a DocumentNode> {
    if predicate(node) {
        return Some(node);
    }
    node.children
        .iter()
        .find_map(|child| find_first(child, predicate))
}
