//! Error types for the token factory contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: caller does not hold the pauser role")]
    UnauthorizedPauser,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("System is paused")]
    SystemPaused,

    // ========================================================================
    // Proof Errors
    // ========================================================================

    #[error("Proof invalid: {reason}")]
    ProofInvalid { reason: String },

    #[error("Proof already used: receipt {receipt_id}")]
    ProofAlreadyUsed { receipt_id: String },

    #[error("Decode error: {reason}")]
    DecodeError { reason: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token already registered: {remote_token_id}")]
    AlreadyRegistered { remote_token_id: String },

    #[error("Not a managed token: {token}")]
    NotManaged { token: String },

    #[error("Invalid remote token id: {reason}")]
    InvalidRemoteTokenId { reason: String },

    #[error("No token registration in progress")]
    NoPendingRegistration,

    // ========================================================================
    // Handler Errors
    // ========================================================================

    #[error("Stale metadata: block height {got} is older than last update at {last_updated}")]
    StaleMetadata { got: u64, last_updated: u64 },

    #[error("Insufficient balance: balance {balance}, required {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },
}
