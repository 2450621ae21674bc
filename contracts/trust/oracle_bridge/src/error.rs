use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unauthorized: {caller}")]
    Unauthorized { caller: String },

    #[error("Batch length mismatch: {subjects} subjects, {scores} scores")]
    LengthMismatch { subjects: usize, scores: usize },

    #[error("Batch is empty")]
    EmptyBatch {},

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
