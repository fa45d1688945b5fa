//! Query handlers for the token factory contract.
//!
//! Queries are never gated by the pause flag.

use cosmwasm_std::{Addr, Binary, Deps, Order, StdError, StdResult};

use common::{BridgeTokenQueryMsg, MetadataResponse};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, IsManagedTokenResponse, LocalAddressResponse, ManagedTokenEntry,
    ManagedTokensResponse, PausersResponse, PendingAdminResponse, ProofUsedResponse,
    RemoteIdResponse,
};
use crate::registry::{is_managed_token, local_address_of, managed_tokens, remote_id_of};
use crate::state::{CONFIG, PAUSERS, PENDING_ADMIN, USED_PROOFS};

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        paused: config.paused,
        prover: config.prover,
        remote_factory: config.remote_factory,
        bridge_token_code_id: config.bridge_token_code_id,
        min_block_acceptance_height: config.min_block_acceptance_height,
        address_prefix: config.address_prefix,
    })
}

pub fn query_pausers(deps: Deps) -> StdResult<PausersResponse> {
    let pausers = PAUSERS
        .range(deps.storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(PausersResponse { pausers })
}

/// Query pending admin change.
pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_is_managed_token(deps: Deps, address: String) -> StdResult<IsManagedTokenResponse> {
    // An address that does not validate cannot have been created here.
    let is_managed = match deps.api.addr_validate(&address) {
        Ok(addr) => is_managed_token(deps.storage, &addr)?,
        Err(_) => false,
    };
    Ok(IsManagedTokenResponse { is_managed })
}

pub fn query_remote_id_of(deps: Deps, address: String) -> StdResult<RemoteIdResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let remote_token_id = remote_id_of(deps.storage, &addr).map_err(to_std)?;
    Ok(RemoteIdResponse { remote_token_id })
}

pub fn query_local_address_of(
    deps: Deps,
    remote_token_id: String,
) -> StdResult<LocalAddressResponse> {
    let address = local_address_of(deps.storage, &remote_token_id).map_err(to_std)?;
    Ok(LocalAddressResponse { address })
}

/// Query registered tokens with pagination.
pub fn query_managed_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<ManagedTokensResponse> {
    let tokens = managed_tokens(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(remote_token_id, address)| ManagedTokenEntry {
            remote_token_id,
            address,
        })
        .collect();
    Ok(ManagedTokensResponse { tokens })
}

/// Query the metadata currently held by a managed token.
pub fn query_token_metadata(deps: Deps, address: String) -> StdResult<MetadataResponse> {
    let addr = deps.api.addr_validate(&address)?;
    remote_id_of(deps.storage, &addr).map_err(to_std)?;
    deps.querier
        .query_wasm_smart(&addr, &BridgeTokenQueryMsg::Metadata {})
}

// ============================================================================
// Replay Queries
// ============================================================================

pub fn query_is_proof_used(deps: Deps, receipt_id: Binary) -> StdResult<ProofUsedResponse> {
    let used = USED_PROOFS.has(deps.storage, receipt_id.as_slice());
    Ok(ProofUsedResponse { used })
}
