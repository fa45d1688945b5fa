//! Metadata sync handler (remote metadata -> local token).

use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, DepsMut, Response, WasmMsg};

use common::{BridgeTokenExecuteMsg, BridgeTokenQueryMsg, MetadataResponse};

use crate::address_codec::encode_hex;
use crate::error::ContractError;
use crate::proof::{consume_proof, verify_and_extract};
use crate::registry::local_address_of;
use crate::result::decode_metadata_result;
use crate::state::CONFIG;

/// Apply proven remote metadata to the managed token.
///
/// A proof for the same height as the last update is accepted and
/// overwrites; only strictly older heights are refused.
pub fn execute_sync_metadata(
    deps: DepsMut,
    proof: Binary,
    block_height: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let outcome = verify_and_extract(deps.as_ref(), &config, proof, block_height)?;
    let result = decode_metadata_result(&outcome.payload)?;
    let token = local_address_of(deps.storage, &result.remote_token_id)?;

    let current: MetadataResponse = deps
        .querier
        .query_wasm_smart(&token, &BridgeTokenQueryMsg::Metadata {})?;
    if result.source_block_height < current.last_updated_height {
        return Err(ContractError::StaleMetadata {
            got: result.source_block_height,
            last_updated: current.last_updated_height,
        });
    }

    consume_proof(deps.storage, &outcome.receipt_id)?;

    let set_metadata = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&BridgeTokenExecuteMsg::SetMetadata {
            name: result.name.clone(),
            symbol: result.symbol.clone(),
            decimals: result.decimals,
            block_height: result.source_block_height,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(set_metadata)
        .add_attribute("action", "set_metadata")
        .add_attribute("token", token)
        .add_attribute("name", result.name)
        .add_attribute("symbol", result.symbol)
        .add_attribute("decimals", result.decimals.to_string())
        .add_attribute("block_height", result.source_block_height.to_string())
        .add_attribute("receipt_id", encode_hex(&outcome.receipt_id)))
}
