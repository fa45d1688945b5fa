//! Token registration.
//!
//! Registration instantiates a new bridge token and records it in the
//! registry once the instantiation reply reports the new address. Both steps
//! run inside the same message, so a failed instantiation leaves no entry.

use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Reply, Response, StdError, SubMsg, SubMsgResponse, WasmMsg,
};

use common::BridgeTokenInstantiateMsg;

use crate::error::ContractError;
use crate::msg::RegisterNewTokenResponse;
use crate::registry::{insert_token, is_registered};
use crate::state::{
    CONFIG, MAX_REMOTE_TOKEN_ID_LEN, PENDING_REGISTRATION, REGISTER_TOKEN_REPLY_ID,
};

/// Start registration of a remote identifier that has never been seen.
pub fn execute_register_new_token(
    deps: DepsMut,
    env: Env,
    remote_token_id: String,
) -> Result<Response, ContractError> {
    if remote_token_id.trim().is_empty() {
        return Err(ContractError::InvalidRemoteTokenId {
            reason: "identifier cannot be empty".to_string(),
        });
    }
    // Bounds the instantiate label as well
    if remote_token_id.len() > MAX_REMOTE_TOKEN_ID_LEN {
        return Err(ContractError::InvalidRemoteTokenId {
            reason: format!("longer than {} bytes", MAX_REMOTE_TOKEN_ID_LEN),
        });
    }
    if is_registered(deps.storage, &remote_token_id)? {
        return Err(ContractError::AlreadyRegistered { remote_token_id });
    }

    let config = CONFIG.load(deps.storage)?;
    PENDING_REGISTRATION.save(deps.storage, &remote_token_id)?;

    let instantiate = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: config.bridge_token_code_id,
        msg: to_json_binary(&BridgeTokenInstantiateMsg {
            remote_token_id: remote_token_id.clone(),
        })?,
        funds: vec![],
        label: format!("bridge-token {}", remote_token_id),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(instantiate, REGISTER_TOKEN_REPLY_ID))
        .add_attribute("action", "register_new_token")
        .add_attribute("token", remote_token_id))
}

/// Complete registration with the address of the instantiated token.
pub fn reply_register_new_token(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let remote_token_id = PENDING_REGISTRATION
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingRegistration)?;
    PENDING_REGISTRATION.remove(deps.storage);

    let response = msg.result.into_result().map_err(StdError::generic_err)?;
    let local = instantiated_address(&response)?;
    let local = deps.api.addr_validate(&local)?;

    insert_token(deps.storage, &remote_token_id, &local)?;

    Ok(Response::new()
        .set_data(to_json_binary(&RegisterNewTokenResponse {
            remote_token_id: remote_token_id.clone(),
            address: local.clone(),
        })?)
        .add_attribute("action", "new_bridge_token")
        .add_attribute("token", remote_token_id)
        .add_attribute("local_token", local))
}

fn instantiated_address(response: &SubMsgResponse) -> Result<String, ContractError> {
    response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| &event.attributes)
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
        .ok_or_else(|| {
            StdError::generic_err("instantiate reply carries no contract address").into()
        })
}
