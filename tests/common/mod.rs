//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;

use knopka::buttons::store::{ButtonStore, StoreError};
use knopka::{ButtonNode, FlatButton};

/// In-memory store serving fixed listings.
pub struct MemoryStore {
    masters: Vec<ButtonNode>,
    buttons: Vec<FlatButton>,
}

impl MemoryStore {
    pub fn new(masters: Vec<ButtonNode>) -> Self {
        Self {
            masters,
            buttons: Vec::new(),
        }
    }

    pub fn with_flat(masters: Vec<ButtonNode>, buttons: Vec<FlatButton>) -> Self {
        Self { masters, buttons }
    }
}

#[async_trait]
impl ButtonStore for MemoryStore {
    async fn masters(&self) -> Result<Vec<ButtonNode>, StoreError> {
        Ok(self.masters.clone())
    }

    async fn buttons(&self) -> Result<Vec<FlatButton>, StoreError> {
        Ok(self.buttons.clone())
    }
}

/// Store that fails every request, like an unreachable backend.
pub struct BrokenStore;

#[async_trait]
impl ButtonStore for BrokenStore {
    async fn masters(&self) -> Result<Vec<ButtonNode>, StoreError> {
        Err(StoreError::Http(reqwest::StatusCode::BAD_GATEWAY))
    }

    async fn buttons(&self) -> Result<Vec<FlatButton>, StoreError> {
        Err(StoreError::Http(reqwest::StatusCode::BAD_GATEWAY))
    }
}

pub fn node(id: i64, title: &str) -> ButtonNode {
    ButtonNode {
        id,
        title: title.to_string(),
        description: None,
        buttons: Vec::new(),
    }
}

pub fn node_with(id: i64, title: &str, description: Option<&str>, buttons: Vec<ButtonNode>) -> ButtonNode {
    ButtonNode {
        id,
        title: title.to_string(),
        description: description.map(str::to_string),
        buttons,
    }
}

/// The menu used throughout the flow tests:
///
/// ```text
/// A (#1, "Hello")
/// ├── A1 (#3)
/// └── A2 (#4, no description, no children)
/// B (#2)
/// ```
pub fn sample_listing() -> Vec<ButtonNode> {
    vec![
        node_with(
            1,
            "A",
            Some("Hello"),
            vec![node_with(3, "A1", Some("Leaf"), Vec::new()), node(4, "A2")],
        ),
        node(2, "B"),
    ]
}
