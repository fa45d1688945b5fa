//! Deposit handler (remote lock -> local mint).

use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, DepsMut, Response, Uint128, WasmMsg};

use common::BridgeTokenExecuteMsg;

use crate::address_codec::{encode_hex, raw_to_local_addr};
use crate::error::ContractError;
use crate::proof::{consume_proof, verify_and_extract};
use crate::registry::local_address_of;
use crate::result::decode_lock_result;
use crate::state::CONFIG;

/// Mint the amount locked on the remote chain to its recipient.
///
/// Proof intake -> lock result -> managed token -> mint. The mint is a
/// sub-message; if it fails the consumed receipt is rolled back with it.
pub fn execute_deposit(
    deps: DepsMut,
    proof: Binary,
    block_height: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let outcome = verify_and_extract(deps.as_ref(), &config, proof, block_height)?;
    let result = decode_lock_result(&outcome.payload)?;
    let token = local_address_of(deps.storage, &result.remote_token_id)?;

    let recipient = raw_to_local_addr(deps.api, &result.recipient, &config.address_prefix)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    let amount = Uint128::new(result.amount);

    consume_proof(deps.storage, &outcome.receipt_id)?;

    let mint = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&BridgeTokenExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "deposit")
        .add_attribute("token", result.remote_token_id)
        .add_attribute("local_token", token)
        .add_attribute("amount", amount)
        .add_attribute("recipient", recipient)
        .add_attribute("receipt_id", encode_hex(&outcome.receipt_id)))
}
