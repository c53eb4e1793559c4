//! Persisted template identity and listings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the question text excerpt in listings (SQL `LEFT(question_text, 80)`).
pub const LISTING_EXCERPT_CHARS: usize = 80;

/// Synthetic identifier of a persisted template.
///
/// Held as text so it can be passed back as a statement parameter whatever
/// the column type is on the remote side.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A template row as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateListing {
    pub question_number: String,
    pub sub_category: String,
    /// Leading characters of the question text
    pub text_excerpt: String,
}
