//! Access gate.
//!
//! Authorization runs once, before an execute message reaches its handler.
//! Handlers contain only bridge logic and assume the caller was admitted.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::{Config, PAUSERS, PENDING_ADMIN};

/// Who may send a message
enum Requirement {
    Anyone,
    NotPaused,
    Pauser,
    Admin,
    PendingAdmin,
}

fn requirement(msg: &ExecuteMsg) -> Requirement {
    match msg {
        ExecuteMsg::RegisterNewToken { .. } => Requirement::Anyone,
        ExecuteMsg::Deposit { .. }
        | ExecuteMsg::Withdraw { .. }
        | ExecuteMsg::SyncMetadata { .. } => Requirement::NotPaused,
        ExecuteMsg::Pause {} | ExecuteMsg::Unpause {} => Requirement::Pauser,
        ExecuteMsg::AddPauser { .. }
        | ExecuteMsg::RemovePauser { .. }
        | ExecuteMsg::UpdateConfig { .. }
        | ExecuteMsg::ProposeAdmin { .. }
        | ExecuteMsg::CancelAdminProposal {} => Requirement::Admin,
        ExecuteMsg::AcceptAdmin {} => Requirement::PendingAdmin,
    }
}

/// Admit or reject `sender` for `msg`.
pub fn authorize(
    storage: &dyn Storage,
    config: &Config,
    sender: &Addr,
    msg: &ExecuteMsg,
) -> Result<(), ContractError> {
    match requirement(msg) {
        Requirement::Anyone => Ok(()),
        Requirement::NotPaused => ensure_not_paused(config),
        Requirement::Pauser => ensure_pauser(storage, sender),
        Requirement::Admin => ensure_admin(config, sender),
        Requirement::PendingAdmin => {
            let pending = PENDING_ADMIN
                .may_load(storage)?
                .ok_or(ContractError::NoPendingAdmin)?;
            if *sender != pending.new_address {
                return Err(ContractError::UnauthorizedPendingAdmin);
            }
            Ok(())
        }
    }
}

pub fn ensure_not_paused(config: &Config) -> Result<(), ContractError> {
    if config.paused {
        return Err(ContractError::SystemPaused);
    }
    Ok(())
}

pub fn ensure_admin(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn ensure_pauser(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let is_pauser = PAUSERS.may_load(storage, sender)?.unwrap_or(false);
    if !is_pauser {
        return Err(ContractError::UnauthorizedPauser);
    }
    Ok(())
}
