use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ordered list of recipe tags, stored as a JSON array in a single column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

/// Result of reading a stored tag column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagDecode {
    Decoded(TagList),
    /// Column was NULL or empty
    Missing,
    /// Column held something other than a JSON array of strings
    Corrupt(String),
}

impl TagList {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Split a comma-delimited string, trimming each piece and dropping empties.
    pub fn from_raw(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Encode for storage. An empty list encodes as `[]`.
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn decode(stored: Option<&str>) -> TagDecode {
        match stored {
            None => TagDecode::Missing,
            Some(s) if s.trim().is_empty() => TagDecode::Missing,
            Some(s) => match serde_json::from_str::<Vec<String>>(s) {
                Ok(tags) => TagDecode::Decoded(Self(tags)),
                Err(e) => TagDecode::Corrupt(e.to_string()),
            },
        }
    }

    /// Fail-soft read: anything that does not decode becomes an empty list.
    pub fn decode_or_empty(stored: Option<&str>, recipe_id: i64) -> Self {
        match Self::decode(stored) {
            TagDecode::Decoded(tags) => tags,
            TagDecode::Missing => Self::default(),
            TagDecode::Corrupt(reason) => {
                warn!(recipe_id, %reason, "Unreadable tags column, treating as empty");
                Self::default()
            }
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
