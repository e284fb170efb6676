//! Walks a decoded token path over the button tree, one level at a time.
//!
//! The listing is fetched once per interaction and nothing is kept between
//! interactions: every press reconstructs its whole position from the
//! callback token.

use thiserror::Error;

use super::model::{ButtonId, ButtonNode};
use super::path::{self, Path};
use super::store::{ButtonStore, StoreError};
use crate::core::config;

#[derive(Debug, Error)]
pub enum TraverseError {
    /// A segment did not resolve within the current candidate set. Later
    /// segments are never consulted.
    #[error("no button matches the requested path segment")]
    NodeNotFound,
    /// More segments than any token this bot mints can carry.
    #[error("path longer than {} segments", config::traversal::MAX_DEPTH)]
    DepthExceeded,
    #[error(transparent)]
    Fetch(#[from] StoreError),
}

/// Outcome of consuming every segment of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    /// Node reached by the last segment; `None` when the path was empty.
    pub terminal: Option<ButtonNode>,
    /// The terminal node's direct children (the root listing for an empty
    /// path): the candidate set for the next screen.
    pub candidates: Vec<ButtonNode>,
}

/// What one interaction should display, fully resolved from a raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The root listing.
    Root(Vec<ButtonNode>),
    /// A terminal node together with its direct children.
    Node {
        terminal: ButtonNode,
        children: Vec<ButtonNode>,
    },
}

/// Resolves `segments` against `listing`, starting from the root candidates.
///
/// Each segment must name a node in the current candidate set; a segment
/// that is not a well-formed id, or that matches no candidate, stops the
/// walk with `NodeNotFound`. A node that exists elsewhere in the tree but
/// not in the current candidate set is just as absent.
pub fn walk(listing: &[ButtonNode], segments: &[String]) -> Result<Walk, TraverseError> {
    if segments.len() > config::traversal::MAX_DEPTH {
        return Err(TraverseError::DepthExceeded);
    }

    let mut terminal: Option<&ButtonNode> = None;
    let mut candidates: &[ButtonNode] = listing;
    for segment in segments {
        let id: ButtonId = segment.parse().map_err(|_| TraverseError::NodeNotFound)?;
        let node = candidates
            .iter()
            .find(|button| button.id == id)
            .ok_or(TraverseError::NodeNotFound)?;
        candidates = &node.buttons;
        terminal = Some(node);
    }

    Ok(Walk {
        terminal: terminal.cloned(),
        candidates: candidates.to_vec(),
    })
}

/// Decodes a callback token and walks a freshly fetched listing.
pub async fn resolve_token(store: &dyn ButtonStore, token: &str) -> Result<Resolution, TraverseError> {
    let segments = match path::decode(token) {
        Path::Back => return Ok(Resolution::Root(store.masters().await?)),
        Path::Segments(segments) => segments,
    };

    let listing = store.masters().await?;
    let walked = walk(&listing, &segments)?;
    match walked.terminal {
        Some(terminal) => Ok(Resolution::Node {
            terminal,
            children: walked.candidates,
        }),
        None => Ok(Resolution::Root(listing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(id: ButtonId, title: &str, buttons: Vec<ButtonNode>) -> ButtonNode {
        ButtonNode {
            id,
            title: title.to_string(),
            description: None,
            buttons,
        }
    }

    fn listing() -> Vec<ButtonNode> {
        vec![
            node(1, "A", vec![node(3, "A1", Vec::new()), node(4, "A2", Vec::new())]),
            node(2, "B", Vec::new()),
        ]
    }

    fn segments(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_path_keeps_the_root_candidates() {
        let walked = walk(&listing(), &[]).unwrap();
        assert_eq!(walked.terminal, None);
        assert_eq!(walked.candidates.len(), 2);
    }

    #[test]
    fn walk_follows_parent_child_links() {
        let walked = walk(&listing(), &segments(&["1", "3"])).unwrap();
        assert_eq!(walked.terminal.unwrap().title, "A1");
        assert!(walked.candidates.is_empty());
    }

    #[test]
    fn terminal_children_become_the_next_candidates() {
        let walked = walk(&listing(), &segments(&["1"])).unwrap();
        let ids: Vec<ButtonId> = walked.candidates.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(matches!(
            walk(&listing(), &segments(&["99"])),
            Err(TraverseError::NodeNotFound)
        ));
    }

    #[test]
    fn globally_present_node_outside_candidates_is_not_found() {
        // Node 2 exists, but is not a child of node 1.
        assert!(matches!(
            walk(&listing(), &segments(&["1", "2"])),
            Err(TraverseError::NodeNotFound)
        ));
    }

    #[test]
    fn non_integer_segment_is_not_found() {
        assert!(matches!(
            walk(&listing(), &segments(&["abc"])),
            Err(TraverseError::NodeNotFound)
        ));
        assert!(matches!(walk(&listing(), &segments(&[""])), Err(TraverseError::NodeNotFound)));
    }

    #[test]
    fn over_long_paths_are_rejected() {
        let too_many = vec!["1".to_string(); config::traversal::MAX_DEPTH + 1];
        assert!(matches!(walk(&listing(), &too_many), Err(TraverseError::DepthExceeded)));
    }
}
