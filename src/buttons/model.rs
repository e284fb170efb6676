//! Button data model shared by the store client, serializer and traversal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length accepted by the store (display characters).
pub const TITLE_LENGTH_MAX: usize = 50;

/// Maximum description length accepted by the store.
pub const DESCRIPTION_LENGTH_MAX: usize = 10_000;

/// Store-assigned button identifier, immutable once assigned.
pub type ButtonId = i64;

/// A menu entry in its nested representation: the node itself plus every
/// descendant, eagerly embedded under `buttons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonNode {
    pub id: ButtonId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub buttons: Vec<ButtonNode>,
}

impl ButtonNode {
    /// Description text; absent and empty are the same thing.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

/// A raw store row: one node with a parent reference instead of embedded
/// children. This is what the flat listing endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatButton {
    pub id: ButtonId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<ButtonId>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Write-time constraints the store enforces. The read path reports
/// violations it observes but keeps serving the data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is empty")]
    TitleEmpty,
    #[error("title longer than {} characters", TITLE_LENGTH_MAX)]
    TitleTooLong,
    #[error("description longer than {} characters", DESCRIPTION_LENGTH_MAX)]
    DescriptionTooLong,
    #[error("created timestamp {0} is in the future")]
    CreatedInFuture(DateTime<Utc>),
}

impl FlatButton {
    /// Key the store orders every listing by.
    pub fn listing_key(&self) -> (&str, &str) {
        (self.title.as_str(), self.description.as_deref().unwrap_or(""))
    }

    /// Checks the store's write-time constraints against a fetched row.
    pub fn check_constraints(&self, now: DateTime<Utc>) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::TitleEmpty);
        }
        if self.title.chars().count() > TITLE_LENGTH_MAX {
            return Err(ValidationError::TitleTooLong);
        }
        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_LENGTH_MAX {
                return Err(ValidationError::DescriptionTooLong);
            }
        }
        if let Some(created) = self.created {
            if created > now {
                return Err(ValidationError::CreatedInFuture(created));
            }
        }
        Ok(())
    }
}
