//! Record of posting ids already delivered to the recipient.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Set of posting ids that have already been delivered.
///
/// Serialized as a plain JSON object of id to boolean marker
/// (`{"4012345678": true, ...}`), matching the blob layout previous runs
/// have written. Only a `true` marker counts as seen. Ids are never removed;
/// size management is outside this type's contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SeenSet(HashMap<String, bool>);

impl SeenSet {
    /// Create an empty seen-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an id has been delivered before.
    pub fn contains(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Mark an id as delivered. Returns `true` if the id was not seen before.
    pub fn mark(&mut self, id: &str) -> bool {
        let fresh = !self.contains(id);
        if fresh {
            self.0.insert(id.to_string(), true);
        }
        fresh
    }

    /// Number of recorded ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no ids have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_new_id() {
        let mut seen = SeenSet::new();
        assert!(seen.mark("A"));
        assert!(seen.contains("A"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut seen = SeenSet::new();
        assert!(seen.mark("A"));
        assert!(!seen.mark("A"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_false_marker_counts_as_unseen() {
        let seen: SeenSet = serde_json::from_str(r#"{"A": false}"#).unwrap();
        assert!(!seen.contains("A"));

        let mut seen = seen;
        assert!(seen.mark("A"));
        assert!(seen.contains("A"));
    }

    #[test]
    fn test_transparent_blob_shape() {
        let mut seen = SeenSet::new();
        seen.mark("4012345678");

        let json = serde_json::to_string(&seen).unwrap();
        assert_eq!(json, r#"{"4012345678":true}"#);
    }
}
