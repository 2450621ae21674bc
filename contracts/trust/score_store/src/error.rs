use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unauthorized: caller {caller} is not the oracle {expected}")]
    Unauthorized { caller: String, expected: String },

    #[error("Score {score} is out of range, expected a value between 0 and 100")]
    OutOfRange { score: u64 },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
