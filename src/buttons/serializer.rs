//! Builds the nested button-tree representation from flat store rows.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use super::model::{ButtonId, ButtonNode, FlatButton};
use crate::core::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializeError {
    #[error("button {0} is its own ancestor")]
    CycleDetected(ButtonId),
    #[error("menu tree deeper than {} levels", config::traversal::MAX_DEPTH)]
    DepthExceeded,
}

type ChildIndex<'a> = BTreeMap<Option<ButtonId>, Vec<&'a FlatButton>>;

/// Converts flat rows into the nested listing, one entry per root, every
/// level ordered ascending by `(title, description)`.
///
/// The parent graph is untrusted: a dangling parent reference makes a row
/// unreachable (it is simply not listed), and a row appearing on its own
/// ancestor path fails with `CycleDetected` instead of recursing forever.
pub fn build_tree(rows: &[FlatButton]) -> Result<Vec<ButtonNode>, SerializeError> {
    let index = child_index(rows);
    let mut on_path = HashSet::new();
    index
        .get(&None)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|root| serialize_node(root, &index, &mut on_path, 0))
        .collect()
}

/// Serializes one node and its full descendant subtree.
pub fn serialize_subtree(root: &FlatButton, rows: &[FlatButton]) -> Result<ButtonNode, SerializeError> {
    let index = child_index(rows);
    let mut on_path = HashSet::new();
    serialize_node(root, &index, &mut on_path, 0)
}

fn child_index(rows: &[FlatButton]) -> ChildIndex<'_> {
    let mut index: ChildIndex<'_> = BTreeMap::new();
    for row in rows {
        index.entry(row.parent_id).or_default().push(row);
    }
    for group in index.values_mut() {
        group.sort_by(|a, b| a.listing_key().cmp(&b.listing_key()));
    }
    index
}

fn serialize_node(
    row: &FlatButton,
    index: &ChildIndex<'_>,
    on_path: &mut HashSet<ButtonId>,
    depth: usize,
) -> Result<ButtonNode, SerializeError> {
    if depth >= config::traversal::MAX_DEPTH {
        return Err(SerializeError::DepthExceeded);
    }
    if !on_path.insert(row.id) {
        return Err(SerializeError::CycleDetected(row.id));
    }

    let mut node = ButtonNode {
        id: row.id,
        title: row.title.clone(),
        description: row.description.clone(),
        buttons: Vec::new(),
    };
    if let Some(children) = index.get(&Some(row.id)) {
        for child in children {
            node.buttons.push(serialize_node(child, index, on_path, depth + 1)?);
        }
    }

    on_path.remove(&row.id);
    Ok(node)
}
