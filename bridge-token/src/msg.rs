use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, MinterResponse, TokenInfoResponse};

pub use common::{BridgeTokenInstantiateMsg as InstantiateMsg, MetadataResponse};

/// Execute messages
///
/// `Mint`, `BridgeBurn` and `SetMetadata` share their wire shape with
/// `common::BridgeTokenExecuteMsg`.
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // CW20
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    // ========================================================================
    // Minter Only
    // ========================================================================
    /// Mint new tokens to `recipient`
    Mint { recipient: String, amount: Uint128 },

    /// Burn tokens from `owner` without an allowance
    BridgeBurn { owner: String, amount: Uint128 },

    /// Replace name, symbol and decimals
    SetMetadata {
        name: String,
        symbol: String,
        decimals: u8,
        block_height: u64,
    },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(Option<MinterResponse>)]
    Minter {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Returns the bridge metadata, including the remote token identifier
    #[returns(MetadataResponse)]
    Metadata {},
}
