//! Withdraw handler (local burn -> remote release).
//!
//! This is the outbound leg: it consumes no proof. The emitted withdraw
//! record is what the remote chain later proves inclusion of.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::BalanceResponse;

use common::{BridgeTokenExecuteMsg, BridgeTokenQueryMsg};

use crate::error::ContractError;
use crate::registry::remote_id_of;

/// Burn `amount` of a managed token from the caller's balance.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    if recipient.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "recipient cannot be empty".to_string(),
        });
    }

    let token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| ContractError::NotManaged { token })?;
    let remote_token_id = remote_id_of(deps.storage, &token)?;

    let balance: BalanceResponse = deps.querier.query_wasm_smart(
        &token,
        &BridgeTokenQueryMsg::Balance {
            address: info.sender.to_string(),
        },
    )?;
    if balance.balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance: balance.balance,
            required: amount,
        });
    }

    let burn = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&BridgeTokenExecuteMsg::BridgeBurn {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "withdraw")
        .add_attribute("token", remote_token_id)
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("recipient", recipient))
}
