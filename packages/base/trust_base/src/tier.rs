use std::fmt;

use cosmwasm_schema::cw_serde;

/// Highest score the registry accepts.
pub const MAX_SCORE: u64 = 100;
/// Lowest score of the LIMITED tier. Everything below is BLOCKED.
pub const LIMITED_THRESHOLD: u64 = 50;
/// Lowest score of the FULL tier.
pub const FULL_THRESHOLD: u64 = 80;

/// Access tier derived from a score. The three ranges
/// `[0, 50)`, `[50, 80)` and `[80, 100]` partition the score domain.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Tier {
    Blocked,
    Limited,
    Full,
}

impl Tier {
    pub fn from_score(score: u64) -> Self {
        if score >= FULL_THRESHOLD {
            Tier::Full
        } else if score >= LIMITED_THRESHOLD {
            Tier::Limited
        } else {
            Tier::Blocked
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Blocked => "BLOCKED",
            Tier::Limited => "LIMITED",
            Tier::Full => "FULL",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a subject with `score` may perform gated actions.
/// Compared against the threshold directly rather than through `Tier`.
pub fn can_perform(score: u64) -> bool {
    score >= LIMITED_THRESHOLD
}
