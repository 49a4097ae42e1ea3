//! Search mode definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two search configurations evaluated per run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Broad search scoped to remote positions
    Remote,
    /// Search scoped to the configured locality
    Local,
}

impl SearchMode {
    /// All modes, in the fixed order they are evaluated per run.
    pub const ALL: [SearchMode; 2] = [SearchMode::Remote, SearchMode::Local];

    /// Display label used in email subjects.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Remote => "Remote",
            SearchMode::Local => "Local",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_order() {
        assert_eq!(SearchMode::ALL, [SearchMode::Remote, SearchMode::Local]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SearchMode::Remote.label(), "Remote");
        assert_eq!(SearchMode::Local.to_string(), "Local");
    }
}
