use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    /// Score store the bridge forwards to. Its oracle must be this bridge's address.
    pub score_store: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    PushScore {
        subject: String,
        score: u64,
    },
    PushScoreBatch {
        subjects: Vec<String>,
        scores: Vec<u64>,
    },
    SetOperator {
        operator: String,
        authorized: bool,
    },
    TransferOwnership {
        new_owner: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    GetConfig {},
    #[returns(bool)]
    IsOperator { address: String },
    #[returns(OperatorsResponse)]
    ListOperators {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub score_store: Addr,
}

#[cw_serde]
pub struct OperatorsResponse {
    pub operators: Vec<Addr>,
}
