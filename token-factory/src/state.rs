//! State definitions for the token factory contract
//!
//! The token registry maps are the only state mutated by registration; the
//! proof-driven handlers read them and write only the used-proof set.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for contract management
    pub admin: Addr,
    /// Whether deposits, withdrawals and metadata syncs are halted
    pub paused: bool,
    /// Prover contract that verifies execution proofs
    pub prover: Addr,
    /// Remote account whose execution outcomes are accepted
    pub remote_factory: String,
    /// Code id instantiated for each newly registered token
    pub bridge_token_code_id: u64,
    /// Proofs for blocks below this height are refused
    pub min_block_acceptance_height: u64,
    /// Bech32 prefix used to turn 20-byte recipients into local addresses
    pub address_prefix: String,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-factory";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

/// Reply id for the bridge token instantiation sub-message
pub const REGISTER_TOKEN_REPLY_ID: u64 = 1;

/// Longest accepted remote token identifier (a remote account id)
pub const MAX_REMOTE_TOKEN_ID_LEN: usize = 64;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Holders of the pause-control role
/// Key: address, Value: whether active
pub const PAUSERS: Map<&Addr, bool> = Map::new("pausers");

// ============================================================================
// Token Registry
// ============================================================================

/// Local token address -> remote token identifier
pub const LOCAL_TO_REMOTE: Map<&Addr, String> = Map::new("local_to_remote");

/// Remote token identifier -> local token address
pub const REMOTE_TO_LOCAL: Map<&str, Addr> = Map::new("remote_to_local");

/// Local token addresses created by this factory
pub const MANAGED: Map<&Addr, bool> = Map::new("managed");

/// Remote identifier whose token instantiation is in flight (cleared in reply)
pub const PENDING_REGISTRATION: Item<String> = Item::new("pending_registration");

// ============================================================================
// Replay Protection
// ============================================================================

/// Receipt ids of consumed proofs
/// Key: receipt id bytes, Value: always true
pub const USED_PROOFS: Map<&[u8], bool> = Map::new("used_proofs");
