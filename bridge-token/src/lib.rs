//! Bridge Token - CW20 token representing a remote token locally.
//!
//! Balances, transfers and allowances are plain cw20-base. Supply and
//! metadata are controlled by the minter, which is always the instantiating
//! token factory.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
