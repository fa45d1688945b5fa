//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause
//! - Pauser role management
//! - Configuration updates
//! - Admin transfer (propose/accept/cancel)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{PendingAdmin, ADMIN_TIMELOCK_DURATION, CONFIG, PAUSERS, PENDING_ADMIN};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops deposits, withdrawals and metadata syncs).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.paused = true;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "pause")
        .add_attribute("sender", info.sender))
}

/// Unpause the contract.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    CONFIG.update(deps.storage, |mut config| -> Result<_, ContractError> {
        config.paused = false;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "unpause")
        .add_attribute("sender", info.sender))
}

// ============================================================================
// Pauser Roles
// ============================================================================

pub fn execute_add_pauser(deps: DepsMut, address: String) -> Result<Response, ContractError> {
    let pauser = deps.api.addr_validate(&address)?;
    PAUSERS.save(deps.storage, &pauser, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_pauser")
        .add_attribute("pauser", pauser))
}

pub fn execute_remove_pauser(deps: DepsMut, address: String) -> Result<Response, ContractError> {
    let pauser = deps.api.addr_validate(&address)?;
    PAUSERS.remove(deps.storage, &pauser);

    Ok(Response::new()
        .add_attribute("action", "remove_pauser")
        .add_attribute("pauser", pauser))
}

// ============================================================================
// Configuration
// ============================================================================

pub fn execute_update_config(
    deps: DepsMut,
    prover: Option<String>,
    remote_factory: Option<String>,
    bridge_token_code_id: Option<u64>,
    min_block_acceptance_height: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    let mut response = Response::new().add_attribute("action", "update_config");

    if let Some(prover) = prover {
        config.prover = deps.api.addr_validate(&prover)?;
        response = response.add_attribute("prover", &config.prover);
    }
    if let Some(remote_factory) = remote_factory {
        response = response.add_attribute("remote_factory", &remote_factory);
        config.remote_factory = remote_factory;
    }
    if let Some(code_id) = bridge_token_code_id {
        config.bridge_token_code_id = code_id;
        response = response.add_attribute("bridge_token_code_id", code_id.to_string());
    }
    if let Some(height) = min_block_acceptance_height {
        config.min_block_acceptance_height = height;
        response = response.add_attribute("min_block_acceptance_height", height.to_string());
    }

    CONFIG.save(deps.storage, &config)?;
    Ok(response)
}

// ============================================================================
// Admin Transfer
// ============================================================================

/// Propose a new admin (starts timelock).
pub fn execute_propose_admin(
    deps: DepsMut,
    env: Env,
    new_admin: String,
) -> Result<Response, ContractError> {
    let new_admin_addr = deps.api.addr_validate(&new_admin)?;
    let pending = PendingAdmin {
        new_address: new_admin_addr.clone(),
        execute_after: env.block.time.plus_seconds(ADMIN_TIMELOCK_DURATION),
    };
    PENDING_ADMIN.save(deps.storage, &pending)?;

    Ok(Response::new()
        .add_attribute("action", "propose_admin")
        .add_attribute("new_admin", new_admin_addr.to_string())
        .add_attribute("execute_after", pending.execute_after.seconds().to_string()))
}

/// Accept pending admin role (after timelock).
///
/// The pauser role held by the admin seat moves to the new admin.
pub fn execute_accept_admin(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAdmin)?;

    if env.block.time < pending.execute_after {
        let remaining = pending.execute_after.seconds() - env.block.time.seconds();
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: remaining,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    PAUSERS.remove(deps.storage, &config.admin);
    PAUSERS.save(deps.storage, &pending.new_address, &true)?;
    config.admin = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("new_admin", pending.new_address.to_string()))
}

/// Cancel pending admin proposal.
pub fn execute_cancel_admin_proposal(deps: DepsMut) -> Result<Response, ContractError> {
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_admin_proposal"))
}
