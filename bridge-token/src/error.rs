use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("Unauthorized: only the minter can perform this action")]
    Unauthorized,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Insufficient balance: balance {balance}, required {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("Stale metadata: block height {got} is older than last update at {last_updated}")]
    StaleMetadata { got: u64, last_updated: u64 },
}
