//! Service tiers a question applies to

use serde::{Deserialize, Serialize};

/// Audit service tier.
///
/// Seeded questions apply to every tier; the set is denormalized onto each
/// template as a JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "tier_0")]
    Tier0,
    #[serde(rename = "tier_1")]
    Tier1,
    #[serde(rename = "tier_2")]
    Tier2,
    #[serde(rename = "tier_3")]
    Tier3,
    #[serde(rename = "tier_4")]
    Tier4,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::Tier0, Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Tier4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier0 => "tier_0",
            Tier::Tier1 => "tier_1",
            Tier::Tier2 => "tier_2",
            Tier::Tier3 => "tier_3",
            Tier::Tier4 => "tier_4",
        }
    }

    /// JSON array of every tier, the value stored in `applicable_tiers`.
    pub fn all_as_json() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
        serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
    }
}
