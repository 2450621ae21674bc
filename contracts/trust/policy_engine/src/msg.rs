use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use trust_base::Tier;

#[cw_serde]
pub struct InstantiateMsg {
    pub score_store: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Tier)]
    GetUserTier { subject: String },
    #[returns(bool)]
    CanPerformAction { subject: String },
    #[returns(AccessInfoResponse)]
    GetAccessInfo { subject: String },
    #[returns(String)]
    GetTierName { subject: String },
    #[returns(ConfigResponse)]
    GetConfig {},
}

#[cw_serde]
pub struct MigrateMsg {}

/// All three fields come from the same score read.
#[cw_serde]
pub struct AccessInfoResponse {
    pub score: u64,
    pub tier: Tier,
    pub can_perform: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub score_store: Addr,
}
