//! Message shapes of the score store contract, shared with the contracts that
//! call into it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// `last_updated` of a subject that has never been written.
pub const NEVER_UPDATED: u64 = 0;

#[cw_serde]
pub struct InstantiateMsg {
    /// The only address allowed to write scores. Fixed for the lifetime of the contract.
    pub oracle: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateScore { subject: String, score: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(u64)]
    GetScore { subject: String },
    #[returns(u64)]
    GetLastUpdated { subject: String },
    #[returns(bool)]
    HasScore { subject: String },
    #[returns(ScoreRecordResponse)]
    GetScoreRecord { subject: String },
    #[returns(ScoresResponse)]
    ListScores {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ConfigResponse)]
    GetConfig {},
}

#[cw_serde]
pub struct ScoreRecordResponse {
    pub subject: Addr,
    pub score: u64,
    pub last_updated: u64,
    pub has_score: bool,
}

#[cw_serde]
pub struct ScoresResponse {
    pub scores: Vec<ScoreRecordResponse>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub oracle: Addr,
}
