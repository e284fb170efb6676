//! Menu tree domain: data model, serializer, token codec and traversal.

pub mod model;
pub mod path;
pub mod serializer;
pub mod store;
pub mod traversal;

// Re-exports for convenience
pub use model::{ButtonId, ButtonNode, FlatButton};
pub use store::{ButtonStore, StoreError};
pub use traversal::{resolve_token, Resolution, TraverseError};
