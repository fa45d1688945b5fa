//! Message types for the token factory contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use common::MetadataResponse;

// ============================================================================
// Instantiate
// ============================================================================

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for contract management (also granted the pauser role)
    pub admin: String,
    /// Prover contract address
    pub prover: String,
    /// Remote account whose execution outcomes are accepted
    pub remote_factory: String,
    /// Code id of the bridge token contract
    pub bridge_token_code_id: u64,
    /// Proofs for blocks below this height are refused
    pub min_block_acceptance_height: u64,
    /// Bech32 prefix of local addresses (e.g. "terra")
    pub address_prefix: String,
    /// Additional pauser addresses
    #[serde(default)]
    pub pausers: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Create the local token for a remote identifier that has never been seen
    ///
    /// Authorization: Anyone
    RegisterNewToken {
        /// Remote token identifier (e.g. "near.token.x")
        remote_token_id: String,
    },

    // ========================================================================
    // Bridge Operations
    // ========================================================================
    /// Mint tokens locked on the remote chain
    ///
    /// Authorization: Anyone holding a valid lock proof (not while paused)
    Deposit {
        /// Execution proof of the remote lock
        proof: Binary,
        /// Finalized remote block height the proof refers to
        block_height: u64,
    },

    /// Burn the caller's tokens so they can be released on the remote chain
    ///
    /// Authorization: Token holder (not while paused)
    Withdraw {
        /// Local bridge token address
        token: String,
        /// Amount to burn
        amount: Uint128,
        /// Recipient account on the remote chain
        recipient: String,
    },

    /// Apply remote token metadata to its local representative
    ///
    /// Authorization: Anyone holding a valid metadata proof (not while paused)
    SyncMetadata {
        /// Execution proof of the remote metadata call
        proof: Binary,
        /// Finalized remote block height the proof refers to
        block_height: u64,
    },

    // ========================================================================
    // Pause Control
    // ========================================================================
    /// Halt deposits, withdrawals and metadata syncs
    ///
    /// Authorization: Pauser role
    Pause {},

    /// Resume deposits, withdrawals and metadata syncs
    ///
    /// Authorization: Pauser role
    Unpause {},

    /// Grant the pauser role
    ///
    /// Authorization: Admin only
    AddPauser { address: String },

    /// Revoke the pauser role
    ///
    /// Authorization: Admin only
    RemovePauser { address: String },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Replace individual configuration values
    ///
    /// Authorization: Admin only
    UpdateConfig {
        prover: Option<String>,
        remote_factory: Option<String>,
        bridge_token_code_id: Option<u64>,
        min_block_acceptance_height: Option<u64>,
    },

    /// Propose a new admin (starts the 7-day timelock)
    ///
    /// Authorization: Admin only
    ProposeAdmin { new_admin: String },

    /// Accept a pending admin proposal after the timelock. The pauser role
    /// moves from the old admin to the new one.
    ///
    /// Authorization: Pending admin only
    AcceptAdmin {},

    /// Cancel a pending admin proposal
    ///
    /// Authorization: Admin only
    CancelAdminProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns whether an address is a token managed by this factory
    #[returns(IsManagedTokenResponse)]
    IsManagedToken { address: String },

    /// Returns the remote identifier of a managed token
    #[returns(RemoteIdResponse)]
    RemoteIdOf { address: String },

    /// Returns the local token of a registered remote identifier
    #[returns(LocalAddressResponse)]
    LocalAddressOf { remote_token_id: String },

    /// Returns registered tokens ordered by remote identifier
    #[returns(ManagedTokensResponse)]
    ManagedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the current metadata of a managed token
    #[returns(MetadataResponse)]
    TokenMetadata { address: String },

    /// Returns whether a proof receipt has been consumed
    #[returns(ProofUsedResponse)]
    IsProofUsed { receipt_id: Binary },

    /// Returns the pauser role holders
    #[returns(PausersResponse)]
    Pausers {},

    /// Returns the pending admin proposal, if any
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub paused: bool,
    pub prover: Addr,
    pub remote_factory: String,
    pub bridge_token_code_id: u64,
    pub min_block_acceptance_height: u64,
    pub address_prefix: String,
}

#[cw_serde]
pub struct IsManagedTokenResponse {
    pub is_managed: bool,
}

#[cw_serde]
pub struct RemoteIdResponse {
    pub remote_token_id: String,
}

#[cw_serde]
pub struct LocalAddressResponse {
    pub address: Addr,
}

#[cw_serde]
pub struct ManagedTokenEntry {
    pub remote_token_id: String,
    pub address: Addr,
}

#[cw_serde]
pub struct ManagedTokensResponse {
    pub tokens: Vec<ManagedTokenEntry>,
}

#[cw_serde]
pub struct ProofUsedResponse {
    pub used: bool,
}

#[cw_serde]
pub struct PausersResponse {
    pub pausers: Vec<Addr>,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}

/// Data set on the response of a successful registration
#[cw_serde]
pub struct RegisterNewTokenResponse {
    pub remote_token_id: String,
    pub address: Addr,
}
