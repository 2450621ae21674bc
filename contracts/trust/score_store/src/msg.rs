use cosmwasm_schema::cw_serde;

pub use trust_base::score_store::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ScoreRecordResponse, ScoresResponse,
};

#[cw_serde]
pub struct MigrateMsg {}
