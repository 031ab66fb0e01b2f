use serde::{Deserialize, Serialize};

/// One property of a defaults document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub key: String,
    /// Default value as written; an absent `<value>` is the empty string.
    pub value: String,
    pub description: Option<String>,
    /// Marked `<final>true</final>` in the document.
    pub is_final: bool,
}

impl DocumentEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into(), description: None, is_final: false }
    }
}
