//! Read-side seam to the tree store collaborator.
//!
//! All mutation of the button tree happens in the admin backend; the bot
//! only ever reads, so the trait covers exactly the two read queries the
//! backend exposes.

use async_trait::async_trait;
use thiserror::Error;

use super::model::{ButtonNode, FlatButton};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed with status: {0}")]
    Http(reqwest::StatusCode),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

/// Read access to the button tree.
#[async_trait]
pub trait ButtonStore: Send + Sync {
    /// Root nodes with their full subtree nested under `buttons`, in the
    /// store's `(title, description)` order.
    async fn masters(&self) -> Result<Vec<ButtonNode>, StoreError>;

    /// Flat listing of every node, parent references included.
    async fn buttons(&self) -> Result<Vec<FlatButton>, StoreError>;
}
