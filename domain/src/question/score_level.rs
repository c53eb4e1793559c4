//! Score level value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Risk band an answer falls into.
///
/// Every question carries exactly one score interpretation per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Low,
    Medium,
    High,
}

impl ScoreLevel {
    /// All levels in catalogue order.
    pub const ALL: [ScoreLevel; 3] = [ScoreLevel::Low, ScoreLevel::Medium, ScoreLevel::High];

    /// Wire/database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLevel::Low => "low",
            ScoreLevel::Medium => "medium",
            ScoreLevel::High => "high",
        }
    }

    /// The canonical level set, as stored in `question_score_examples.score_level`.
    pub fn canonical_set() -> BTreeSet<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }

    /// Returns `true` if `levels` is exactly {low, medium, high}.
    ///
    /// Duplicates collapse, so callers that care about multiplicity must
    /// check the count separately.
    pub fn is_complete_set<S: AsRef<str>>(levels: &[S]) -> bool {
        let present: BTreeSet<&str> = levels.iter().map(|l| l.as_ref()).collect();
        present == Self::canonical_set()
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
