use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use trust_base::score_store::NEVER_UPDATED;

#[cw_serde]
pub struct Config {
    pub oracle: Addr,
}

/// Score and last write time of one subject. Both fields are written together.
#[cw_serde]
pub struct ScoreRecord {
    pub score: u64,
    pub last_updated: u64,
}

impl Default for ScoreRecord {
    fn default() -> Self {
        ScoreRecord {
            score: 0,
            last_updated: NEVER_UPDATED,
        }
    }
}

impl ScoreRecord {
    pub fn has_score(&self) -> bool {
        self.last_updated != NEVER_UPDATED
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const SCORES: Map<&Addr, ScoreRecord> = Map::new("scores");
