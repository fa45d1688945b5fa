//! Token Factory Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `access` - authorization, checked once before dispatch
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::access::authorize;
use crate::address_codec::{encode_bech32_address, RAW_ADDRESS_LEN};
use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_add_pauser, execute_cancel_admin_proposal, execute_deposit,
    execute_pause, execute_propose_admin, execute_register_new_token, execute_remove_pauser,
    execute_sync_metadata, execute_unpause, execute_update_config, execute_withdraw,
    reply_register_new_token,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_config, query_is_managed_token, query_is_proof_used, query_local_address_of,
    query_managed_tokens, query_pausers, query_pending_admin, query_remote_id_of,
    query_token_metadata,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PAUSERS, REGISTER_TOKEN_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let prover = deps.api.addr_validate(&msg.prover)?;

    if msg.remote_factory.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "remote_factory cannot be empty".to_string(),
        });
    }

    // Reject a prefix that could never produce a recipient address.
    encode_bech32_address(&[0u8; RAW_ADDRESS_LEN], &msg.address_prefix).map_err(|e| {
        ContractError::InvalidAddress {
            reason: format!("address_prefix: {}", e),
        }
    })?;

    let config = Config {
        admin,
        paused: false,
        prover,
        remote_factory: msg.remote_factory,
        bridge_token_code_id: msg.bridge_token_code_id,
        min_block_acceptance_height: msg.min_block_acceptance_height,
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    PAUSERS.save(deps.storage, &config.admin, &true)?;
    for pauser in msg.pausers {
        let pauser = deps.api.addr_validate(&pauser)?;
        PAUSERS.save(deps.storage, &pauser, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("prover", config.prover)
        .add_attribute("remote_factory", config.remote_factory)
        .add_attribute("bridge_token_code_id", config.bridge_token_code_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    authorize(deps.storage, &config, &info.sender, &msg)?;

    match msg {
        // Registry
        ExecuteMsg::RegisterNewToken { remote_token_id } => {
            execute_register_new_token(deps, env, remote_token_id)
        }

        // Bridge operations
        ExecuteMsg::Deposit {
            proof,
            block_height,
        } => execute_deposit(deps, proof, block_height),
        ExecuteMsg::Withdraw {
            token,
            amount,
            recipient,
        } => execute_withdraw(deps, info, token, amount, recipient),
        ExecuteMsg::SyncMetadata {
            proof,
            block_height,
        } => execute_sync_metadata(deps, proof, block_height),

        // Pause control
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::AddPauser { address } => execute_add_pauser(deps, address),
        ExecuteMsg::RemovePauser { address } => execute_remove_pauser(deps, address),

        // Admin
        ExecuteMsg::UpdateConfig {
            prover,
            remote_factory,
            bridge_token_code_id,
            min_block_acceptance_height,
        } => execute_update_config(
            deps,
            prover,
            remote_factory,
            bridge_token_code_id,
            min_block_acceptance_height,
        ),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REGISTER_TOKEN_REPLY_ID => reply_register_new_token(deps, msg),
        id => Err(StdError::generic_err(format!("unknown reply id {}", id)).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsManagedToken { address } => {
            to_json_binary(&query_is_managed_token(deps, address)?)
        }
        QueryMsg::RemoteIdOf { address } => to_json_binary(&query_remote_id_of(deps, address)?),
        QueryMsg::LocalAddressOf { remote_token_id } => {
            to_json_binary(&query_local_address_of(deps, remote_token_id)?)
        }
        QueryMsg::ManagedTokens { start_after, limit } => {
            to_json_binary(&query_managed_tokens(deps, start_after, limit)?)
        }
        QueryMsg::TokenMetadata { address } => {
            to_json_binary(&query_token_metadata(deps, address)?)
        }
        QueryMsg::IsProofUsed { receipt_id } => {
            to_json_binary(&query_is_proof_used(deps, receipt_id)?)
        }
        QueryMsg::Pausers {} => to_json_binary(&query_pausers(deps)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr};

    use crate::msg::{ConfigResponse, PausersResponse};

    fn instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            admin: "admin".to_string(),
            prover: "prover".to_string(),
            remote_factory: "factory.bridge.near".to_string(),
            bridge_token_code_id: 2,
            min_block_acceptance_height: 100,
            address_prefix: "terra".to_string(),
            pausers: vec!["guardian".to_string()],
        }
    }

    #[test]
    fn test_instantiate_stores_config_and_pausers() {
        let mut deps = mock_dependencies();
        let info = mock_info("creator", &[]);

        let res = instantiate(deps.as_mut(), mock_env(), info, instantiate_msg()).unwrap();
        assert_eq!(res.attributes[0].value, "instantiate");

        let config: ConfigResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
        assert_eq!(config.admin, Addr::unchecked("admin"));
        assert!(!config.paused);
        assert_eq!(config.remote_factory, "factory.bridge.near");
        assert_eq!(config.min_block_acceptance_height, 100);

        let pausers: PausersResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Pausers {}).unwrap()).unwrap();
        assert_eq!(
            pausers.pausers,
            vec![Addr::unchecked("admin"), Addr::unchecked("guardian")]
        );
    }

    #[test]
    fn test_instantiate_rejects_bad_prefix() {
        let mut deps = mock_dependencies();
        let mut msg = instantiate_msg();
        msg.address_prefix = "Terra".to_string();

        let err = instantiate(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg)
            .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAddress { .. }));
    }

    #[test]
    fn test_paused_contract_rejects_withdraw_before_handler() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            instantiate_msg(),
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("guardian", &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("holder", &[]),
            ExecuteMsg::Withdraw {
                token: "contract1".to_string(),
                amount: 10u128.into(),
                recipient: "alice.near".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::SystemPaused);
    }

    #[test]
    fn test_unknown_reply_id() {
        let mut deps = mock_dependencies();
        let msg = Reply {
            id: 99,
            result: cosmwasm_std::SubMsgResult::Err("boom".to_string()),
        };
        assert!(reply(deps.as_mut(), mock_env(), msg).is_err());
    }
}
