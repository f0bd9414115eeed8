use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A single quiz question.
///
/// The same field names are used on the wire and in the document store, so the
/// struct is serialized as-is in both places. Absent fields decode to their
/// empty value; the store's own `_id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    /// The prompt shown to the player.
    pub question: String,
    /// The choices, in display order.
    pub options: Vec<String>,
    /// The expected answer. Not checked against `options`.
    pub answer: String,
    /// The category used for filtering. Must be non-empty to be stored.
    pub category: String,
}

impl Question {
    /// Checks the record before it is persisted.
    ///
    /// Only `category` is enforced: duplicates, empty option lists and answers
    /// that are not among the options are all accepted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.category.is_empty() {
            return Err(CoreError::CategoryRequired);
        }
        Ok(())
    }
}
