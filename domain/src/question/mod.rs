//! Questionnaire items as defined in code.
//!
//! - [`definition::QuestionDefinition`]: one catalogue entry
//! - [`score_level::ScoreLevel`]: low / medium / high
//! - [`tier::Tier`]: service tiers a template applies to

pub mod definition;
pub mod score_level;
pub mod tier;
