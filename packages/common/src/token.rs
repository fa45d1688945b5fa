//! Bridge token messages sent by the factory.
//!
//! These mirror a subset of the bridge token contract's own message enums.
//! Variant and field names must stay in sync with `bridge-token`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Instantiate message for a newly registered bridge token
#[cw_serde]
pub struct BridgeTokenInstantiateMsg {
    /// Remote token identifier this token represents
    pub remote_token_id: String,
}

/// Minter-only operations on a bridge token
#[cw_serde]
pub enum BridgeTokenExecuteMsg {
    /// Mint `amount` to `recipient`
    Mint { recipient: String, amount: Uint128 },
    /// Burn `amount` from `owner`'s balance
    BridgeBurn { owner: String, amount: Uint128 },
    /// Replace display metadata, recording the remote height it came from
    SetMetadata {
        name: String,
        symbol: String,
        decimals: u8,
        block_height: u64,
    },
}

/// Queries the factory issues against a bridge token
#[cw_serde]
#[derive(QueryResponses)]
pub enum BridgeTokenQueryMsg {
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    #[returns(MetadataResponse)]
    Metadata {},
}

/// Current display metadata of a bridge token
#[cw_serde]
pub struct MetadataResponse {
    pub remote_token_id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Remote block height of the last applied metadata (0 = never set)
    pub last_updated_height: u64,
}
