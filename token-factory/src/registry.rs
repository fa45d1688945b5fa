//! Token registry.
//!
//! Bidirectional mapping between remote token identifiers and the local
//! tokens created for them. Entries are only ever appended, by
//! [`insert_token`] during registration; a remote identifier maps to at most
//! one local token for its lifetime.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{LOCAL_TO_REMOTE, MANAGED, REMOTE_TO_LOCAL};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn is_managed_token(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(MANAGED.may_load(storage, address)?.unwrap_or(false))
}

pub fn is_registered(storage: &dyn Storage, remote_token_id: &str) -> StdResult<bool> {
    match REMOTE_TO_LOCAL.may_load(storage, remote_token_id)? {
        Some(local) => is_managed_token(storage, &local),
        None => Ok(false),
    }
}

pub fn remote_id_of(storage: &dyn Storage, address: &Addr) -> Result<String, ContractError> {
    if !is_managed_token(storage, address)? {
        return Err(ContractError::NotManaged {
            token: address.to_string(),
        });
    }
    Ok(LOCAL_TO_REMOTE.load(storage, address)?)
}

pub fn local_address_of(
    storage: &dyn Storage,
    remote_token_id: &str,
) -> Result<Addr, ContractError> {
    let local = REMOTE_TO_LOCAL
        .may_load(storage, remote_token_id)?
        .ok_or_else(|| ContractError::NotManaged {
            token: remote_token_id.to_string(),
        })?;

    if !is_managed_token(storage, &local)? {
        return Err(ContractError::NotManaged {
            token: remote_token_id.to_string(),
        });
    }
    Ok(local)
}

/// Append a registry entry in both directions and mark the token managed.
pub fn insert_token(
    storage: &mut dyn Storage,
    remote_token_id: &str,
    local: &Addr,
) -> Result<(), ContractError> {
    if is_registered(storage, remote_token_id)? || is_managed_token(storage, local)? {
        return Err(ContractError::AlreadyRegistered {
            remote_token_id: remote_token_id.to_string(),
        });
    }

    LOCAL_TO_REMOTE.save(storage, local, &remote_token_id.to_string())?;
    REMOTE_TO_LOCAL.save(storage, remote_token_id, local)?;
    MANAGED.save(storage, local, &true)?;
    Ok(())
}

/// Registered tokens ordered by remote identifier.
pub fn managed_tokens(
    storage: &dyn Storage,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<(String, Addr)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    REMOTE_TO_LOCAL
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
